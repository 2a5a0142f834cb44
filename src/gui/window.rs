//! # Windows GUI Window Management
//!
//! Win32 window creation, the window procedure and the message pump. The
//! window procedure only decodes messages and forwards them to the
//! `Dispatcher`; all behaviour lives in `WindowController`.

use std::cell::RefCell;

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, RECT, WPARAM},
        Graphics::Gdi::{BeginPaint, EndPaint, InvalidateRect, PAINTSTRUCT},
        System::LibraryLoader::GetModuleHandleW,
        UI::Input::KeyboardAndMouse::{
            ReleaseCapture, SetCapture, TrackMouseEvent, TME_HOVER, TME_LEAVE, TRACKMOUSEEVENT,
        },
        UI::WindowsAndMessaging::{
            CreateWindowExW, DefWindowProcW, DispatchMessageW, GetClientRect, GetMessageW,
            LoadCursorW, PostQuitMessage, RegisterClassW, SetWindowTextW, ShowWindow,
            TranslateMessage, CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, IDC_ARROW, MSG,
            SW_SHOWDEFAULT, WNDCLASSW, WS_OVERLAPPEDWINDOW,
        },
    },
};

use super::renderer::Direct2D;
use crate::config::Config;
use crate::controller::WindowController;
use crate::dispatch::{Dispatcher, Response};
use crate::error::StartupError;
use crate::event::{RawMessage, WM_CREATE};
use crate::event_loop::{self, Fetched, MessagePump};
use crate::platform::{Platform, PlatformError};
use crate::shape::PixelSize;

const CLASS_NAME: &str = "Circle Window Class";
const HOVER_DEFAULT: u32 = 0xFFFF_FFFF;

// The window procedure has no user data to hang state on, so it lives here.
thread_local! {
    static PENDING_CONFIG: RefCell<Option<Config>> = const { RefCell::new(None) };
    static CREATE_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
    static DISPATCHER: RefCell<Option<Dispatcher>> = const { RefCell::new(None) };
}

/// Create the window, run the message loop and return the exit code.
pub fn run_gui(config: Config) -> Result<i32, StartupError> {
    let instance =
        unsafe { GetModuleHandleW(None) }.map_err(|e| StartupError::Platform(e.to_string()))?;
    let hinstance = HINSTANCE(instance.0);
    let class_name = wide_string(CLASS_NAME);

    let wc = WNDCLASSW {
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(window_proc),
        hInstance: hinstance,
        lpszClassName: PCWSTR(class_name.as_ptr()),
        hCursor: unsafe { LoadCursorW(None, IDC_ARROW) }
            .map_err(|e| StartupError::Platform(e.to_string()))?,
        ..Default::default()
    };

    if unsafe { RegisterClassW(&wc) } == 0 {
        return Err(StartupError::RegisterClass(CLASS_NAME.to_string()));
    }

    let (width, height) = config.initial_size.unwrap_or((CW_USEDEFAULT, CW_USEDEFAULT));
    let title = wide_string(&config.title);
    PENDING_CONFIG.with(|pending| *pending.borrow_mut() = Some(config));

    let hwnd = unsafe {
        CreateWindowExW(
            Default::default(),
            PCWSTR(class_name.as_ptr()),
            PCWSTR(title.as_ptr()),
            WS_OVERLAPPEDWINDOW,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            width,
            height,
            None,
            None,
            Some(hinstance),
            None,
        )
    }
    .map_err(|e| {
        DISPATCHER.with(|d| d.borrow_mut().take());
        let reason = CREATE_ERROR.with(|c| c.borrow_mut().take());
        StartupError::CreateWindow(reason.unwrap_or_else(|| e.to_string()))
    })?;

    unsafe {
        let _ = ShowWindow(hwnd, SW_SHOWDEFAULT);
    }

    let exit_code = event_loop::run(&mut Win32Pump);
    DISPATCHER.with(|d| d.borrow_mut().take());
    Ok(exit_code)
}

/// Convert string to wide string for Win32 APIs
fn wide_string(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Build the controller for a freshly created window.
fn install_controller(hwnd: HWND) {
    let Some(config) = PENDING_CONFIG.with(|pending| pending.borrow_mut().take()) else {
        CREATE_ERROR.with(|c| *c.borrow_mut() = Some("window created twice".into()));
        return;
    };

    let controller = WindowController::new(&config, Direct2D::new(hwnd));
    DISPATCHER.with(|d| *d.borrow_mut() = Some(Dispatcher::new(Box::new(controller))));
}

/// Window procedure for handling messages
unsafe extern "system" fn window_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if msg == WM_CREATE {
        install_controller(hwnd);
    }

    let raw = RawMessage::new(msg, wparam.0, lparam.0);
    // A busy dispatcher means a message sent from inside a handler
    // (SetWindowText, ReleaseCapture); those get default processing.
    let response = DISPATCHER.with(|cell| match cell.try_borrow_mut() {
        Ok(mut slot) => match slot.as_mut() {
            Some(dispatcher) => dispatcher.dispatch_raw(&mut Win32Platform::new(hwnd), raw),
            None if msg == WM_CREATE => Response::Fail,
            None => Response::Default,
        },
        Err(_) => Response::Default,
    });

    if msg == WM_CREATE && response == Response::Fail {
        CREATE_ERROR.with(|c| {
            c.borrow_mut().get_or_insert_with(|| "Direct2D factory unavailable".into());
        });
    }

    match response.lresult() {
        Some(result) => LRESULT(result),
        None => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}

/// `Platform` over a live window handle, valid for one message.
struct Win32Platform {
    hwnd: HWND,
    paint: Option<PAINTSTRUCT>,
}

impl Win32Platform {
    fn new(hwnd: HWND) -> Self {
        Self { hwnd, paint: None }
    }
}

impl Platform for Win32Platform {
    fn client_size(&self) -> PixelSize {
        let mut rect = RECT::default();
        unsafe {
            let _ = GetClientRect(self.hwnd, &mut rect);
        }
        PixelSize::new(
            (rect.right - rect.left).max(0) as u32,
            (rect.bottom - rect.top).max(0) as u32,
        )
    }

    fn invalidate(&mut self) {
        unsafe {
            let _ = InvalidateRect(Some(self.hwnd), None, false);
        }
    }

    fn begin_paint(&mut self) {
        let mut ps = PAINTSTRUCT::default();
        unsafe {
            let _ = BeginPaint(self.hwnd, &mut ps);
        }
        self.paint = Some(ps);
    }

    fn end_paint(&mut self) {
        if let Some(ps) = self.paint.take() {
            unsafe {
                let _ = EndPaint(self.hwnd, &ps);
            }
        }
    }

    fn set_capture(&mut self) {
        unsafe {
            let _ = SetCapture(self.hwnd);
        }
    }

    fn release_capture(&mut self) {
        unsafe {
            let _ = ReleaseCapture();
        }
    }

    fn track_hover_and_leave(&mut self) -> Result<(), PlatformError> {
        let mut tme = TRACKMOUSEEVENT {
            cbSize: std::mem::size_of::<TRACKMOUSEEVENT>() as u32,
            dwFlags: TME_HOVER | TME_LEAVE,
            hwndTrack: self.hwnd,
            dwHoverTime: HOVER_DEFAULT,
        };
        unsafe { TrackMouseEvent(&mut tme) }
            .map_err(|e| PlatformError::new("TrackMouseEvent", e.to_string()))
    }

    fn set_title(&mut self, title: &str) {
        let wide = wide_string(title);
        unsafe {
            let _ = SetWindowTextW(self.hwnd, PCWSTR(wide.as_ptr()));
        }
    }

    fn post_quit(&mut self, exit_code: i32) {
        unsafe { PostQuitMessage(exit_code) };
    }
}

/// `GetMessageW` / `DispatchMessageW` pump for the calling thread.
struct Win32Pump;

impl MessagePump for Win32Pump {
    type Message = MSG;

    fn fetch(&mut self) -> Fetched<MSG> {
        let mut msg = MSG::default();
        let result = unsafe { GetMessageW(&mut msg, None, 0, 0) };
        match result.0 {
            -1 => Fetched::Failed(std::io::Error::last_os_error().to_string()),
            0 => Fetched::Quit(msg.wParam.0 as i32),
            _ => Fetched::Message(msg),
        }
    }

    fn deliver(&mut self, msg: MSG) {
        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}
