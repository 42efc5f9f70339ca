//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: false,                     // 决定应用是否应该退出
//!     focus: FocusPanel::Grid,                // 当前焦点：网格或搜索框
//!     dashboard: DashboardState {             // 国家列表与筛选条件
//!         status: Loading,                        // init() 已发出 FetchAll
//!         displayed: [],                          // 数据到达前显示加载指示器
//!         ..
//!     },
//!     modal: ModalState { active: None, .. }, // 详情 / 帮助弹窗
//!     status_message: None,                   // 状态栏消息
//!
//! }
//!
//!
//! 主循环每 50 ms 左右执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!
//!     while let Some(msg) = backend.try_recv() {      // 取出已完成的请求结果
//!         update(&mut app, Backend(msg))                  // 过期结果在这里被丢弃
//!     }
//!     update(&mut app, Tick(now))                     // 动画帧 + 到期的防抖搜索
//!
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 50ms
//!         let msg = handle_event(event, &app);            // 接收原始事件并分发消息
//!         update(&mut app, msg)                           // 更新状态
//!     }
//!
//!     每次 update 返回的 Command 都交给 backend.dispatch() 在后台执行
//! }
//!
//! 界面线程从不等待网络，请求结果只通过 channel 回到这里。

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::backend::Backend;
use crate::event;
use crate::message::{AppMessage, Command};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询间隔，同时决定 Tick 频率
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, backend: &mut Backend) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理后台结果
        while let Some(msg) = backend.try_recv() {
            let command = update::update(app, AppMessage::Backend(msg));
            dispatch(backend, command);
        }

        // 4. 时钟
        let command = update::update(app, AppMessage::Tick(Instant::now()));
        dispatch(backend, command);

        // 5. 轮询事件
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event, app);
            let command = update::update(app, msg);
            dispatch(backend, command);
        }
    }

    log::info!("Main loop finished, {} request(s) in flight", backend.in_flight());
    Ok(())
}

fn dispatch(backend: &mut Backend, command: Option<Command>) {
    if let Some(command) = command {
        log::debug!("Dispatching {command:?}");
        backend.dispatch(command);
    }
}
