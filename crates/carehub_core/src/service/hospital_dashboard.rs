//! Hospital dashboard shell: fragment routing plus one page per domain.
//!
//! # Responsibility
//! - Resolve `#/` fragments into the active sub-page for a role.
//! - Own every directory page for the dashboard's lifetime.
//! - Summarize page stores for the overview cards.
//!
//! # Invariants
//! - Every page starts from seed data; nothing is carried across instances.
//! - The active route is always reachable by the dashboard's role.

use crate::model::activity::ActivityEntry;
use crate::model::hospital::{Department, Doctor, DoctorStatus, Nurse, Staff};
use crate::model::patient::{Patient, PatientStatus};
use crate::model::seed;
use crate::routing::{Role, Route};
use crate::service::dashboard_page::DashboardPage;
use crate::store::record_store::RecordStore;
use log::debug;

/// Headline numbers for the overview page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewStats {
    pub departments: usize,
    pub doctors: usize,
    pub doctors_available: usize,
    pub nurses: usize,
    pub patients: usize,
    pub patients_waiting: usize,
    pub patients_treating: usize,
    pub beds_total: u64,
    pub beds_available: u64,
}

/// Dashboard view controller.
#[derive(Debug, Clone)]
pub struct HospitalDashboard {
    role: Role,
    route: Route,
    pub departments: DashboardPage<Department>,
    pub doctors: DashboardPage<Doctor>,
    pub nurses: DashboardPage<Nurse>,
    pub patients: DashboardPage<Patient>,
    pub staff: DashboardPage<Staff>,
    pub activity: DashboardPage<ActivityEntry>,
}

impl HospitalDashboard {
    /// Builds a dashboard whose pages start from the static seed data.
    pub fn seeded(role: Role) -> Self {
        Self {
            role,
            route: Route::Overview,
            departments: DashboardPage::new(RecordStore::from_seed(seed::departments())),
            doctors: DashboardPage::new(RecordStore::from_seed(seed::doctors())),
            nurses: DashboardPage::new(RecordStore::from_seed(seed::nurses())),
            patients: DashboardPage::new(RecordStore::from_seed(seed::patients())),
            staff: DashboardPage::new(RecordStore::from_seed(seed::staff())),
            activity: DashboardPage::new(RecordStore::from_seed(seed::activity_log())),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Switches the active page from a URL fragment.
    pub fn navigate(&mut self, fragment: &str) -> Route {
        self.route = self.role.resolve(fragment);
        debug!(
            "event=navigate module=dashboard status=ok role={:?} route={}",
            self.role,
            self.route.as_str()
        );
        self.route
    }

    /// Opens the landing page stored in user preferences.
    pub fn open_landing(&mut self, landing: Route) -> Route {
        self.navigate(&landing.fragment())
    }

    pub fn overview(&self) -> OverviewStats {
        let departments = self.departments.store().records();
        let doctors = self.doctors.store().records();
        let patients = self.patients.store().records();

        let count_patients = |status: PatientStatus| {
            patients
                .iter()
                .filter(|record| record.fields.status == status)
                .count()
        };

        OverviewStats {
            departments: departments.len(),
            doctors: doctors.len(),
            doctors_available: doctors
                .iter()
                .filter(|record| record.fields.status == DoctorStatus::Available)
                .count(),
            nurses: self.nurses.store().len(),
            patients: patients.len(),
            patients_waiting: count_patients(PatientStatus::Waiting),
            patients_treating: count_patients(PatientStatus::Treating),
            beds_total: departments
                .iter()
                .map(|record| u64::from(record.fields.total_beds))
                .sum(),
            beds_available: departments
                .iter()
                .map(|record| u64::from(record.fields.available_beds()))
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HospitalDashboard;
    use crate::model::patient::Patient;
    use crate::model::record::FieldInput;
    use crate::routing::{Role, Route};

    #[test]
    fn navigate_respects_role_reach() {
        let mut dashboard = HospitalDashboard::seeded(Role::Doctor);
        assert_eq!(dashboard.navigate("#/patients"), Route::Patients);
        assert_eq!(dashboard.navigate("#/departments"), Route::Overview);
        assert_eq!(dashboard.route(), Route::Overview);
    }

    #[test]
    fn overview_tracks_page_stores() {
        let mut dashboard = HospitalDashboard::seeded(Role::Hospital);
        let before = dashboard.overview();
        assert_eq!(before.patients_waiting, 2);
        assert_eq!(before.beds_total, 225);

        let mut fields = Patient::blank();
        fields.name = "Nisha Reddy".to_string();
        fields.department = "Neurology".to_string();
        assert!(dashboard.patients.create(fields).is_created());

        let after = dashboard.overview();
        assert_eq!(after.patients, before.patients + 1);
        assert_eq!(after.patients_waiting, 3);
    }

    #[test]
    fn overview_bed_totals_do_not_overflow_at_field_maximum() {
        let mut dashboard = HospitalDashboard::seeded(Role::Hospital);
        let before = dashboard.overview();
        let id = dashboard.departments.store().records()[0].id.clone();

        assert!(dashboard.departments.open_edit(&id));
        dashboard
            .departments
            .edit_field("total_beds", FieldInput::text("4294967295"))
            .unwrap();
        dashboard.departments.commit_edit();

        let after = dashboard.overview();
        assert_eq!(after.beds_total, before.beds_total - 60 + u64::from(u32::MAX));
        assert_eq!(
            after.beds_available,
            before.beds_available - 12 + u64::from(u32::MAX - 48)
        );
    }

    #[test]
    fn pages_are_independent_between_dashboards() {
        let mut first = HospitalDashboard::seeded(Role::Hospital);
        let second = HospitalDashboard::seeded(Role::Hospital);
        let mut fields = Patient::blank();
        fields.name = "Temp".to_string();
        fields.department = "Cardiology".to_string();
        first.patients.create(fields);
        assert_eq!(
            second.patients.store().len() + 1,
            first.patients.store().len()
        );
    }
}
