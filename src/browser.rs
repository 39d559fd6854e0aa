//! Browser entry point: wires a [`Page`] over the live document.
//!
//! SYSTEM CONTEXT
//! ==============
//! The core is synchronous and clock-free. This bridge supplies what it
//! leaves out:
//!
//! - one JS listener per [`Page::listeners`] entry, each forwarding to
//!   [`Page::invoke`] and honoring its [`EventOutcome`];
//! - a single armed `setTimeout` for [`Page::next_deadline`];
//! - `gloo-net` fetches for every request drained with
//!   [`Page::take_requests`], reported back through [`Page::complete_loan`].
//!
//! After every entry into the core the bridge "pumps": sends new requests and
//! re-arms the timer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event};

use crate::config::UiConfig;
use crate::consts::ATTR_UI_CONFIG;
use crate::dom::WebDom;
use crate::net;
use crate::page::{EventOutcome, Page};

struct Bridge {
    page: RefCell<Page<WebDom>>,
    /// Deadline the pending `setTimeout` was armed for.
    armed: Cell<Option<u64>>,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger not installed: {err}").into());
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document, page behaviors disabled");
        return;
    };
    if document.ready_state() == "loading" {
        let deferred = document.clone();
        let on_ready = Closure::once(move || boot(deferred));
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref()) {
            log::warn!("DOMContentLoaded listener failed: {err:?}");
            return;
        }
        on_ready.forget();
    } else {
        boot(document);
    }
}

fn read_config(document: &Document) -> UiConfig {
    let Some(raw) = document.body().and_then(|body| body.get_attribute(ATTR_UI_CONFIG)) else {
        return UiConfig::default();
    };
    match UiConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring {ATTR_UI_CONFIG}: {err}");
            UiConfig::default()
        }
    }
}

fn boot(document: Document) {
    let config = read_config(&document);
    let mut page = Page::new(WebDom::new(document), config);
    page.attach(now_ms());

    let targets = page
        .listeners()
        .iter()
        .map(|listener| (listener.node.clone(), listener.kind))
        .collect::<Vec<_>>();
    let bridge = Rc::new(Bridge { page: RefCell::new(page), armed: Cell::new(None) });

    for (id, (node, kind)) in targets.into_iter().enumerate() {
        let handle = Rc::clone(&bridge);
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| on_event(&handle, id, &event));
        if let Err(err) = node.add_event_listener_with_callback(kind.as_str(), callback.as_ref().unchecked_ref()) {
            log::warn!("{} listener {id} not installed: {err:?}", kind.as_str());
            continue;
        }
        callback.forget();
    }
    listen_resize(&bridge);
    pump(&bridge);
}

fn on_event(bridge: &Rc<Bridge>, id: usize, event: &Event) {
    let Some(Ok(target)) = event.target().map(JsCast::dyn_into::<Element>) else {
        return;
    };
    let outcome = match bridge.page.try_borrow_mut() {
        Ok(mut page) => page.invoke(id, &target, now_ms()),
        Err(err) => {
            log::warn!("{} event dropped, page busy: {err}", event.type_());
            return;
        }
    };
    if outcome == EventOutcome::PreventDefault {
        event.prevent_default();
    }
    pump(bridge);
}

fn listen_resize(bridge: &Rc<Bridge>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let handle = Rc::clone(bridge);
    let source = window.clone();
    let callback = Closure::<dyn FnMut()>::new(move || {
        let width = match source.inner_width() {
            Ok(width) => width.as_f64(),
            Err(err) => {
                log::warn!("innerWidth unavailable: {err:?}");
                None
            }
        };
        let Some(width) = width else {
            return;
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let width = width as u32;
        match handle.page.try_borrow_mut() {
            Ok(mut page) => page.resize(width, now_ms()),
            Err(err) => {
                log::warn!("resize dropped, page busy: {err}");
                return;
            }
        }
        pump(&handle);
    });
    if let Err(err) = window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref()) {
        log::warn!("resize listener not installed: {err:?}");
        return;
    }
    callback.forget();
}

/// Send drained requests and re-arm the timer.
fn pump(bridge: &Rc<Bridge>) {
    let (requests, deadline) = match bridge.page.try_borrow_mut() {
        Ok(mut page) => (page.take_requests(), page.next_deadline()),
        Err(err) => {
            log::warn!("pump skipped, page busy: {err}");
            return;
        }
    };
    for request in requests {
        let handle = Rc::clone(bridge);
        spawn_local(async move {
            let result = net::loan::send(&request.url).await;
            match handle.page.try_borrow_mut() {
                Ok(mut page) => page.complete_loan(request.ticket, result, now_ms()),
                Err(err) => {
                    log::warn!("loan response {} dropped, page busy: {err}", request.ticket);
                    return;
                }
            }
            pump(&handle);
        });
    }
    if let Some(deadline) = deadline {
        arm(bridge, deadline);
    }
}

fn arm(bridge: &Rc<Bridge>, deadline: u64) {
    if bridge.armed.get().is_some_and(|armed| armed <= deadline) {
        return;
    }
    bridge.armed.set(Some(deadline));
    let delay = u32::try_from(deadline.saturating_sub(now_ms())).unwrap_or(u32::MAX);
    let handle = Rc::clone(bridge);
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay).await;
        if handle.armed.get() == Some(deadline) {
            handle.armed.set(None);
        }
        let ran = match handle.page.try_borrow_mut() {
            Ok(mut page) => page.run_due(now_ms()),
            Err(err) => {
                log::warn!("timer tick deferred, page busy: {err}");
                0
            }
        };
        log::trace!("timer tick ran {ran} task(s)");
        pump(&handle);
    });
}
