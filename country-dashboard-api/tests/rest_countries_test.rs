//! restcountries 在线集成测试
//!
//! 运行方式:
//! ```bash
//! COUNTRY_API_LIVE_TESTS=1 \
//!     cargo test -p country-dashboard-api --test rest_countries_test -- --ignored --nocapture
//! ```

mod common;

use common::{LIVE_TESTS_VAR, live_client};
use country_dashboard_api::{ApiError, CountryApi};

#[tokio::test]
#[ignore = "integration test: requires network and COUNTRY_API_LIVE_TESTS"]
async fn test_all_returns_every_region() {
    skip_unless_env!(LIVE_TESTS_VAR);

    let Some(api) = live_client() else {
        panic!("创建客户端失败");
    };
    let countries = require_ok!(api.all().await, "all 调用失败");

    assert!(countries.len() > 200, "国家数量过少: {}", countries.len());
    for region in ["Africa", "Americas", "Asia", "Europe", "Oceania"] {
        assert!(
            countries.iter().any(|c| c.region == region),
            "缺少区域 {region}"
        );
    }
    assert!(countries.iter().all(|c| !c.name.official.is_empty()));

    println!("✓ all 测试通过，共 {} 个国家", countries.len());
}

#[tokio::test]
#[ignore = "integration test: requires network and COUNTRY_API_LIVE_TESTS"]
async fn test_search_by_partial_name() {
    skip_unless_env!(LIVE_TESTS_VAR);

    let Some(api) = live_client() else {
        panic!("创建客户端失败");
    };
    let countries = require_ok!(api.search_by_name("swit").await, "search_by_name 调用失败");

    assert!(
        countries.iter().any(|c| c.cca3 == "CHE"),
        "搜索结果应包含瑞士"
    );
    println!("✓ search_by_name 测试通过");
}

#[tokio::test]
#[ignore = "integration test: requires network and COUNTRY_API_LIVE_TESTS"]
async fn test_detail_for_canada() {
    skip_unless_env!(LIVE_TESTS_VAR);

    let Some(api) = live_client() else {
        panic!("创建客户端失败");
    };
    let canada = require_ok!(
        api.detail_by_official_name("Canada").await,
        "detail_by_official_name 调用失败"
    );

    assert_eq!(canada.cca3, "CAN");
    assert!(canada.capital.iter().any(|c| c == "Ottawa"));
    assert!(!canada.timezones.is_empty());
    println!("✓ detail 测试通过: {}", canada.currency_summary());
}

#[tokio::test]
#[ignore = "integration test: requires network and COUNTRY_API_LIVE_TESTS"]
async fn test_unknown_name_is_not_found() {
    skip_unless_env!(LIVE_TESTS_VAR);

    let Some(api) = live_client() else {
        panic!("创建客户端失败");
    };
    let result = api.search_by_name("zzzz-no-such-country").await;

    assert!(
        matches!(result, Err(ApiError::NotFound { .. })),
        "应返回 NotFound: {result:?}"
    );
}
