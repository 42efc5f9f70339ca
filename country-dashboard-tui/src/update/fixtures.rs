//! 测试用数据

use country_dashboard_api::{Country, CountryName};

use crate::model::App;

pub fn country(name: &str, cca3: &str, region: &str, population: u64) -> Country {
    Country {
        name: CountryName {
            common: name.to_string(),
            official: name.to_string(),
        },
        cca3: cca3.to_string(),
        region: region.to_string(),
        population,
        ..Country::default()
    }
}

/// 已完成全量加载的应用
pub fn app_with(countries: Vec<Country>) -> App {
    let mut app = App::default();
    app.dashboard.set_all(countries);
    app
}

pub fn common_names(app: &App) -> Vec<&str> {
    app.dashboard
        .displayed
        .iter()
        .map(|c| c.name.common.as_str())
        .collect()
}
