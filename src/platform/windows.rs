// Subclassed window procedure answering the two frame questions live:
// WM_NCHITTEST -> border region code, WM_SIZING -> aspect-corrected RECT.

use std::cell::Cell;

use windows_sys::Win32::Foundation::RECT;
use windows_sys::Win32::UI::WindowsAndMessaging::{
    CallWindowProcW, GetWindowRect, SetWindowLongPtrW, GWLP_WNDPROC, HTCLIENT, WM_NCHITTEST,
    WM_SIZING, WNDPROC,
};

use crate::hook::{FrameGeometry, NativeHook};
use crate::types::{Point, Rect, Size};

// Single window on the event-loop thread.
thread_local! {
    static ORIG_PROC: Cell<isize> = const { Cell::new(0) };
    static BORDER: Cell<i32>      = const { Cell::new(0) };
    static IMAGE: Cell<Option<Size>> = const { Cell::new(None) };
}

/// Install the subclass. Must be called exactly once per HWND; a second call
/// would store `subclass_proc` as its own predecessor.
///
/// # Safety
/// `hwnd` must be a live window owned by the calling thread.
pub unsafe fn install(hwnd: isize, border: i32) {
    BORDER.with(|c| c.set(border));
    #[allow(clippy::fn_to_numeric_cast)]
    let old = unsafe { SetWindowLongPtrW(hwnd, GWLP_WNDPROC, subclass_proc as isize) };
    ORIG_PROC.with(|c| c.set(old));
    log::debug!("native frame hook installed");
}

/// Tell the hook which image the frame is locked to.
pub fn set_image(image: Size) {
    IMAGE.with(|c| c.set(Some(image)));
}

/// Current outer window size, as the OS sees it.
fn window_size(hwnd: isize) -> Size {
    let mut rc = RECT { left: 0, top: 0, right: 0, bottom: 0 };
    // SAFETY: hwnd comes from the window procedure; rc is a valid out pointer.
    unsafe { GetWindowRect(hwnd, &mut rc) };
    Size::new(rc.right - rc.left, rc.bottom - rc.top)
}

fn geometry(hwnd: isize) -> FrameGeometry {
    let mut geo = FrameGeometry::new(BORDER.with(|c| c.get()), window_size(hwnd));
    geo.image = IMAGE.with(|c| c.get());
    geo
}

unsafe fn call_original(hwnd: isize, msg: u32, wparam: usize, lparam: isize) -> isize {
    let orig = ORIG_PROC.with(|c| c.get());
    // SAFETY: `orig` is the WNDPROC returned by SetWindowLongPtrW in `install`.
    let orig_fn: WNDPROC = unsafe { std::mem::transmute(orig) };
    unsafe { CallWindowProcW(orig_fn, hwnd, msg, wparam, lparam) }
}

unsafe extern "system" fn subclass_proc(hwnd: isize, msg: u32, wparam: usize, lparam: isize) -> isize {
    match msg {
        WM_NCHITTEST => {
            let result = unsafe { call_original(hwnd, msg, wparam, lparam) };
            if result != HTCLIENT as isize {
                return result;
            }
            // lParam carries signed 16-bit screen coordinates.
            let sx = (lparam & 0xFFFF) as u16 as i16 as i32;
            let sy = ((lparam >> 16) & 0xFFFF) as u16 as i16 as i32;
            let mut rc = RECT { left: 0, top: 0, right: 0, bottom: 0 };
            // SAFETY: as in `window_size`.
            unsafe { GetWindowRect(hwnd, &mut rc) };
            let client = Point::new(sx - rc.left, sy - rc.top);

            let region = geometry(hwnd).classify_hit_test(client);
            // The interior stays HTCLIENT so presses reach the viewer, which
            // decides between drawing and starting a caption drag.
            if region.is_border() { region.ht_code() } else { result }
        }
        WM_SIZING => {
            if lparam != 0 {
                // SAFETY: for WM_SIZING, lParam points to the proposed window RECT
                // for the duration of this call.
                let rc = unsafe { &mut *(lparam as *mut RECT) };
                let proposed = Rect::new(rc.left, rc.top, rc.right, rc.bottom);
                let fixed = geometry(hwnd).adjust_resize_rect(proposed);
                rc.right = fixed.right;
                rc.bottom = fixed.bottom;
            }
            1 // TRUE: rectangle was adjusted
        }
        _ => unsafe { call_original(hwnd, msg, wparam, lparam) },
    }
}
