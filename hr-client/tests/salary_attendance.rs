//! Salary schedule patches and the day-scoped attendance view.

use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tokio::net::TcpListener;
use tokio::sync::watch;

use hr_client::api::{AttendanceApi, AuthApi, EmployeeApi, SalaryApi};
use hr_client::models::{
    AttendanceCreate, AttendanceStatus, Employee, EmployeeCreate, GroupType, PayFrequency,
    SalaryCreate, SalaryUpdate,
};
use hr_client::sync::{ListController, ListOptions, ListState, LoadPhase, Mutator};
use hr_client::{ClientConfig, Gateway, Session};

async fn signed_in_gateway() -> (ClientConfig, Gateway) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let addr = listener.local_addr().expect("mock listener addr");
    tokio::spawn(async move {
        let _ = hr_api_mock::run(listener).await;
    });

    let config = ClientConfig::new(format!("http://{addr}")).with_debounce_ms(30);
    let gateway = Gateway::new(&config, Session::default());
    AuthApi::new(gateway.clone())
        .login(hr_api_mock::ADMIN_EMAIL, hr_api_mock::ADMIN_PASSWORD)
        .await
        .expect("admin login");
    (config, gateway)
}

async fn create_employee(api: &EmployeeApi, name: &str, email: &str) -> Employee {
    api.create(&EmployeeCreate {
        name: name.to_string(),
        email: email.to_string(),
        group_type: GroupType::NormalEmployee,
        password: None,
    })
    .await
    .expect("create employee")
}

async fn wait_for<T, F>(rx: &mut watch::Receiver<ListState<T>>, mut pred: F) -> ListState<T>
where
    T: Clone,
    F: FnMut(&ListState<T>) -> bool,
{
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            {
                let state = rx.borrow();
                if pred(&state) {
                    return state.clone();
                }
            }
            rx.changed().await.expect("list driver stopped");
        }
    })
    .await
    .expect("timed out waiting for list state")
}

#[tokio::test]
async fn test_salary_patch_changes_schedule_but_not_amount() {
    let (config, gateway) = signed_in_gateway().await;
    let employees = EmployeeApi::new(gateway.clone());
    let salaries = SalaryApi::new(gateway.clone());

    let employee = create_employee(&employees, "Pat Quinn", "pat@hr.local").await;

    let salary = salaries
        .create(&SalaryCreate {
            amount: Decimal::new(500050, 2),
            pay_frequency: PayFrequency::Monthly,
            employee_id: employee.id,
            effective_date: "2026-09-01T00:00:00Z".parse().expect("date"),
        })
        .await
        .expect("create salary");
    assert_eq!(salary.amount, Decimal::new(500050, 2));

    let controller = ListController::spawn(salaries.clone(), config.list_options());
    let mut rx = controller.watch();
    wait_for(&mut rx, |s| s.phase == LoadPhase::Loaded && s.items.len() == 1).await;

    let mutator = Mutator::new(controller.handle());
    let patched = {
        let salaries = salaries.clone();
        let id = salary.id;
        mutator
            .update(id, async move {
                salaries
                    .update(
                        id,
                        &SalaryUpdate {
                            pay_frequency: Some(PayFrequency::BiWeekly),
                            ..SalaryUpdate::default()
                        },
                    )
                    .await
            })
            .await
            .expect("patch salary")
    };

    assert_eq!(patched.pay_frequency, PayFrequency::BiWeekly);
    assert_eq!(patched.amount, salary.amount);
    assert_eq!(patched.effective_date, salary.effective_date);

    let state = wait_for(&mut rx, |s| {
        s.items
            .iter()
            .any(|r| r.pay_frequency == PayFrequency::BiWeekly)
    })
    .await;
    assert_eq!(state.items[0].amount, salary.amount);
}

#[tokio::test]
async fn test_salary_for_unknown_employee_is_rejected() {
    let (_config, gateway) = signed_in_gateway().await;
    let salaries = SalaryApi::new(gateway.clone());

    let err = salaries
        .create(&SalaryCreate {
            amount: Decimal::new(100000, 2),
            pay_frequency: PayFrequency::Weekly,
            employee_id: 404,
            effective_date: "2026-09-01T00:00:00Z".parse().expect("date"),
        })
        .await
        .unwrap_err();
    assert_eq!(err.message, "Employee 404 not found");
}

#[tokio::test]
async fn test_attendance_day_view_and_status_patch() {
    let (config, gateway) = signed_in_gateway().await;
    let employees = EmployeeApi::new(gateway.clone());
    let attendance = AttendanceApi::new(gateway.clone());

    let ann = create_employee(&employees, "Ann Lee", "ann@hr.local").await;
    let bob = create_employee(&employees, "Bob Chu", "bob@hr.local").await;

    let monday = NaiveDate::from_ymd_opt(2026, 8, 24).expect("date");
    let tuesday = NaiveDate::from_ymd_opt(2026, 8, 25).expect("date");

    attendance
        .create(&AttendanceCreate {
            date: monday,
            status: AttendanceStatus::Present,
            employee_id: ann.id,
        })
        .await
        .expect("check in ann");
    attendance
        .create(&AttendanceCreate {
            date: monday,
            status: AttendanceStatus::Absent,
            employee_id: bob.id,
        })
        .await
        .expect("check in bob");
    attendance
        .create(&AttendanceCreate {
            date: tuesday,
            status: AttendanceStatus::Present,
            employee_id: ann.id,
        })
        .await
        .expect("check in ann, next day");

    let options = ListOptions {
        date: Some(monday),
        ..config.list_options()
    };
    let controller = ListController::spawn(attendance.clone(), options);
    let mut rx = controller.watch();
    let state = wait_for(&mut rx, |s| s.phase == LoadPhase::Loaded && s.items.len() == 2).await;
    assert!(state.items.iter().all(|r| r.date == monday));
    // Each row carries the joined employee snapshot.
    assert!(state.items.iter().any(|r| r.employee.name == ann.name));

    let row_id = state
        .items
        .iter()
        .find(|r| r.employee_id == bob.id)
        .map(|r| r.id)
        .expect("bob's record");

    let mutator = Mutator::new(controller.handle());
    let patched = {
        let attendance = attendance.clone();
        mutator
            .update(row_id, async move {
                attendance.set_status(row_id, AttendanceStatus::Late).await
            })
            .await
            .expect("patch status")
    };
    assert_eq!(patched.status, AttendanceStatus::Late);
    assert_eq!(patched.employee_id, bob.id);
    assert_eq!(patched.date, monday);

    let state = wait_for(&mut rx, |s| {
        s.items
            .iter()
            .any(|r| r.id == row_id && r.status == AttendanceStatus::Late)
    })
    .await;
    assert_eq!(state.items.len(), 2);

    // Switching the day swaps in that day's records.
    controller.set_date(Some(tuesday));
    let state = wait_for(&mut rx, |s| {
        s.date == Some(tuesday) && s.phase == LoadPhase::Loaded && s.items.len() == 1
    })
    .await;
    assert_eq!(state.items[0].employee_id, ann.id);
}

#[tokio::test]
async fn test_duplicate_check_in_is_rejected() {
    let (_config, gateway) = signed_in_gateway().await;
    let employees = EmployeeApi::new(gateway.clone());
    let attendance = AttendanceApi::new(gateway.clone());

    let ann = create_employee(&employees, "Ann Lee", "ann@hr.local").await;
    let day = NaiveDate::from_ymd_opt(2026, 8, 24).expect("date");

    let payload = AttendanceCreate {
        date: day,
        status: AttendanceStatus::Present,
        employee_id: ann.id,
    };
    attendance.create(&payload).await.expect("first check-in");

    let err = attendance.create(&payload).await.unwrap_err();
    assert_eq!(
        err.message,
        "Attendance already recorded for this employee on that date"
    );
}
