//! CLI entry point for browsing the seeded dashboard.
//!
//! Usage: `carehub_cli [fragment] [search]`, e.g. `carehub_cli '#/patients' aarav`.
//! Set `CAREHUB_DATA_DIR` to an absolute path to enable file logging and
//! persisted preferences.

use carehub_core::{
    init_logging_from_config, load_settings, open_db, CoreConfig, DashboardPage, HospitalDashboard,
    Loaded, RecordFields, Role, Route, SqliteKeyValueStore, UserPreferences,
};
use log::warn;

fn main() {
    let config = CoreConfig::from_env();
    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("logging disabled: {err}");
    }

    let mut args = std::env::args().skip(1);
    let fragment = args.next();
    let search = args.next().unwrap_or_default();

    let preferences = load_preferences(&config);
    if let Some(advisory) = &preferences.advisory {
        eprintln!("{advisory}");
    }

    let mut dashboard = HospitalDashboard::seeded(Role::Hospital);
    let route = match fragment {
        Some(fragment) => dashboard.navigate(&fragment),
        None => dashboard.open_landing(preferences.value.landing),
    };

    println!("carehub_core version={}", carehub_core::core_version());
    println!("route={}", route.as_str());
    match route {
        Route::Settings => println!("{}", describe_preferences(&preferences.value)),
        Route::Overview => {
            let stats = dashboard.overview();
            println!(
                "patients={} waiting={} treating={} doctors_available={}/{} beds_available={}/{}",
                stats.patients,
                stats.patients_waiting,
                stats.patients_treating,
                stats.doctors_available,
                stats.doctors,
                stats.beds_available,
                stats.beds_total
            );
        }
        Route::Departments => print_page(&mut dashboard.departments, &search),
        Route::Doctors => print_page(&mut dashboard.doctors, &search),
        Route::Nurses => print_page(&mut dashboard.nurses, &search),
        Route::Patients => print_page(&mut dashboard.patients, &search),
        Route::Staff => print_page(&mut dashboard.staff, &search),
        Route::Activity => print_page(&mut dashboard.activity, &search),
    }
}

fn load_preferences(config: &CoreConfig) -> Loaded<UserPreferences> {
    let Some(path) = config.settings_db_path() else {
        return Loaded {
            value: UserPreferences::default(),
            advisory: None,
        };
    };

    if let Some(dir) = path.parent() {
        if let Err(err) = std::fs::create_dir_all(dir) {
            warn!("event=cli_start module=cli status=error reason=data_dir error={err}");
        }
    }

    match open_db(&path) {
        Ok(conn) => load_settings(&SqliteKeyValueStore::new(&conn)),
        Err(err) => {
            warn!("event=cli_start module=cli status=error reason=settings_db error={err}");
            Loaded {
                value: UserPreferences::default(),
                advisory: Some(format!("Settings unavailable ({err}); using defaults.")),
            }
        }
    }
}

fn describe_preferences(preferences: &UserPreferences) -> String {
    format!(
        "theme={:?} language={:?} notifications={} density={:?} landing={}",
        preferences.theme,
        preferences.language,
        preferences.notifications,
        preferences.density,
        preferences.landing.as_str()
    )
}

fn print_page<F: RecordFields>(page: &mut DashboardPage<F>, search: &str) {
    page.set_search(search);
    let view = page.visible();
    if let Some(message) = view.empty_message() {
        println!("{message}");
        return;
    }

    for record in view.rows() {
        let columns: Vec<String> = F::SEARCH_FIELDS
            .iter()
            .filter_map(|name| record.field(name))
            .map(|value| value.as_label())
            .collect();
        println!("{}  {}", record.id, columns.join(" | "));
    }
    println!("showing {} of {}", view.len(), view.total());
}

#[cfg(test)]
mod tests {
    use super::describe_preferences;
    use carehub_core::settings::preferences::Theme;
    use carehub_core::{Route, UserPreferences};

    #[test]
    fn settings_page_describes_loaded_preferences() {
        let preferences = UserPreferences {
            theme: Theme::Dark,
            landing: Route::Patients,
            ..UserPreferences::default()
        };
        assert_eq!(
            describe_preferences(&preferences),
            "theme=Dark language=En notifications=true density=Comfortable landing=patients"
        );
    }
}
