//! Department model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Employee, GroupType};

/// Department with its member roster embedded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentWithEmployees {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub employees: Vec<DepartmentEmployee>,
}

/// Member entry embedded in a department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentEmployee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub group_type: GroupType,
}

impl From<Employee> for DepartmentEmployee {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            email: employee.email,
            group_type: employee.group_type,
        }
    }
}

/// Create department payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentCreate {
    pub name: String,
}

/// Update department payload; `employees` replaces the whole roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentUpdate {
    pub name: String,
    pub employees: Vec<i64>,
}
