//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;

use country_dashboard_api::{ClientOptions, DEFAULT_BASE_URL, RestCountriesClient};

/// 开启在线测试的环境变量
pub const LIVE_TESTS_VAR: &str = "COUNTRY_API_LIVE_TESTS";

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_unless_env {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 创建指向在线 API 的客户端
///
/// `COUNTRY_API_BASE_URL` 可覆盖默认地址（例如自建镜像）。
pub fn live_client() -> Option<RestCountriesClient> {
    let base_url = env::var("COUNTRY_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    RestCountriesClient::new(ClientOptions {
        base_url,
        ..ClientOptions::default()
    })
    .ok()
}
