//! Windows low-level mouse and keyboard hook implementation.
//!
//! Installs `WH_MOUSE_LL` and `WH_KEYBOARD_LL` on one dedicated Win32
//! message-loop thread, so both hook kinds are delivered on the same thread
//! and subscribers never run concurrently with each other.
//!
//! Teardown posts `WM_QUIT` to that thread; the thread unhooks both handles
//! on its way out and the owner joins it.
//!
//! # Safety
//!
//! This module uses `unsafe` code exclusively for Windows API FFI calls.
//! All `unsafe` blocks are annotated with `// SAFETY:` comments.

#![cfg(target_os = "windows")]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, PoisonError, RwLock};
use std::thread::{self, JoinHandle};

use taskcorner_core::{InputEvent, KeyEvent, MouseButton, PointerEvent};
use tracing::{debug, info, warn};
use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, DispatchMessageW, GetMessageW, PostThreadMessageW, SetWindowsHookExW,
    TranslateMessage, UnhookWindowsHookEx, HC_ACTION, HHOOK, KBDLLHOOKSTRUCT, MSG,
    MSLLHOOKSTRUCT, WH_KEYBOARD_LL, WH_MOUSE_LL, WM_KEYDOWN, WM_LBUTTONDOWN, WM_MOUSEMOVE,
    WM_QUIT, WM_RBUTTONDOWN,
};

use super::{HookInstallError, HookSource, InputHandler};

/// Subscribers reached from the hook callbacks, which carry no context
/// pointer of their own.
static SUBSCRIBERS: RwLock<Vec<InputHandler>> = RwLock::new(Vec::new());

/// Only one hook source may be installed per process: the callbacks share
/// [`SUBSCRIBERS`].
static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Windows global input hook source.
pub struct WindowsHookSource {
    handlers: Vec<InputHandler>,
    thread: Option<HookThread>,
}

struct HookThread {
    thread_id: u32,
    handle: JoinHandle<()>,
}

impl WindowsHookSource {
    /// Creates a new (uninstalled) hook source.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            thread: None,
        }
    }
}

impl Default for WindowsHookSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HookSource for WindowsHookSource {
    fn subscribe(&mut self, handler: InputHandler) {
        if self.thread.is_some() {
            SUBSCRIBERS
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .push(handler.clone());
        }
        self.handlers.push(handler);
    }

    fn install(&mut self) -> Result<(), HookInstallError> {
        if INSTALLED.swap(true, Ordering::SeqCst) {
            return Err(HookInstallError::AlreadyInstalled);
        }

        *SUBSCRIBERS.write().unwrap_or_else(PoisonError::into_inner) = self.handlers.clone();

        let (ready_tx, ready_rx) = mpsc::channel::<Result<u32, HookInstallError>>();
        let spawned = thread::Builder::new()
            .name("taskcorner-hook-loop".to_string())
            .spawn(move || run_hook_message_loop(ready_tx));

        let handle = match spawned {
            Ok(handle) => handle,
            Err(e) => {
                release_globals();
                return Err(HookInstallError::ThreadStart(e.to_string()));
            }
        };

        // The thread reports back once both hooks are in place (or not).
        let outcome = ready_rx
            .recv()
            .unwrap_or_else(|_| Err(HookInstallError::ThreadStart("hook thread exited".into())));

        match outcome {
            Ok(thread_id) => {
                info!(thread_id, "global input hooks installed");
                self.thread = Some(HookThread { thread_id, handle });
                Ok(())
            }
            Err(e) => {
                let _ = handle.join();
                release_globals();
                Err(e)
            }
        }
    }

    fn teardown(&mut self) {
        let Some(thread) = self.thread.take() else {
            return;
        };

        // SAFETY: Posting WM_QUIT to a thread we own; the loop exits and unhooks.
        let posted = unsafe { PostThreadMessageW(thread.thread_id, WM_QUIT, WPARAM(0), LPARAM(0)) };
        if let Err(e) = posted {
            warn!("could not signal hook thread, hooks leak until process exit: {e}");
            release_globals();
            return;
        }
        if thread.handle.join().is_err() {
            warn!("hook thread panicked during teardown");
        }
        release_globals();
        info!("global input hooks removed");
    }

    fn is_installed(&self) -> bool {
        self.thread.is_some()
    }
}

impl Drop for WindowsHookSource {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn release_globals() {
    SUBSCRIBERS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
    INSTALLED.store(false, Ordering::SeqCst);
}

/// Entry point for the dedicated Win32 message loop thread.
fn run_hook_message_loop(ready: mpsc::Sender<Result<u32, HookInstallError>>) {
    // SAFETY: SetWindowsHookExW requires the calling thread to pump messages;
    // this thread enters its loop right after installation.
    let mouse_hook: HHOOK = match unsafe { SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_hook_proc), None, 0) } {
        Ok(hook) => hook,
        Err(e) => {
            let _ = ready.send(Err(HookInstallError::MouseHookInstallFailed(e.to_string())));
            return;
        }
    };
    // SAFETY: As above.
    let kbd_hook: HHOOK = match unsafe { SetWindowsHookExW(WH_KEYBOARD_LL, Some(keyboard_hook_proc), None, 0) } {
        Ok(hook) => hook,
        Err(e) => {
            release_hook(mouse_hook, "mouse");
            let _ = ready.send(Err(HookInstallError::KeyboardHookInstallFailed(e.to_string())));
            return;
        }
    };

    // SAFETY: GetCurrentThreadId has no preconditions.
    let thread_id = unsafe { GetCurrentThreadId() };
    let _ = ready.send(Ok(thread_id));

    // Win32 message loop – blocks until WM_QUIT is posted
    let mut msg = MSG::default();
    // SAFETY: Standard Win32 GetMessage/DispatchMessage loop pattern.
    unsafe {
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    release_hook(kbd_hook, "keyboard");
    release_hook(mouse_hook, "mouse");
    debug!("hook message loop exited");
}

fn release_hook(hook: HHOOK, kind: &str) {
    // SAFETY: `hook` was returned by SetWindowsHookExW on this thread and is
    // released exactly once.
    if let Err(e) = unsafe { UnhookWindowsHookEx(hook) } {
        warn!(kind, "failed to release hook; it leaks until process exit: {e}");
    }
}

/// Handlers run on a snapshot: a callback re-entered from inside a handler
/// must not nest a read guard behind a pending writer.
fn dispatch(event: InputEvent) {
    let handlers = SUBSCRIBERS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    for handler in &handlers {
        handler(&event);
    }
}

/// Low-level mouse hook callback.
///
/// # Safety
///
/// Called by Windows from the hook message loop thread; must return quickly.
unsafe extern "system" fn mouse_hook_proc(n_code: i32, w_param: WPARAM, l_param: LPARAM) -> LRESULT {
    if n_code == HC_ACTION as i32 {
        // SAFETY: l_param points to a MSLLHOOKSTRUCT when n_code == HC_ACTION.
        let mhs = &*(l_param.0 as *const MSLLHOOKSTRUCT);
        let (x, y) = (mhs.pt.x, mhs.pt.y);

        let event = match w_param.0 as u32 {
            WM_MOUSEMOVE => Some(PointerEvent::moved(x, y)),
            WM_LBUTTONDOWN => Some(PointerEvent::pressed(MouseButton::Left, x, y)),
            WM_RBUTTONDOWN => Some(PointerEvent::pressed(MouseButton::Right, x, y)),
            _ => None,
        };
        if let Some(event) = event {
            dispatch(event.into());
        }
    }

    // SAFETY: Always forward to the next hook in the chain.
    CallNextHookEx(None, n_code, w_param, l_param)
}

/// Low-level keyboard hook callback.
///
/// # Safety
///
/// Called by Windows from the hook message loop thread; must return quickly.
unsafe extern "system" fn keyboard_hook_proc(
    n_code: i32,
    w_param: WPARAM,
    l_param: LPARAM,
) -> LRESULT {
    if n_code == HC_ACTION as i32 && w_param.0 as u32 == WM_KEYDOWN {
        // SAFETY: l_param points to a KBDLLHOOKSTRUCT when n_code == HC_ACTION.
        let kbs = &*(l_param.0 as *const KBDLLHOOKSTRUCT);
        dispatch(KeyEvent { vk_code: kbs.vkCode }.into());
    }

    // SAFETY: Always forward to the next hook in the chain.
    CallNextHookEx(None, n_code, w_param, l_param)
}
