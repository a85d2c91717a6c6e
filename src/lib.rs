//! # Workout Checklist Core
//!
//! Local storage for a weekly workout tracker, designed for FFI (Foreign Function
//! Interface) integration with a mobile front end. Each day of the week owns one
//! checklist (exercises with sets and reps, or a todo list on the rest day), persisted
//! as a single JSON record in an LMDB environment on the device.
//!
//! ## Features
//!
//! - **One parameterized store**: [`store::ChecklistStore`] serves every day; the day only
//!   picks the storage key and the item variant
//! - **Whole-record writes**: each add, update, toggle or remove overwrites the day's record
//! - **Corruption tolerant reads**: unreadable records load as an empty checklist
//! - **Safe error handling**: No `unwrap()` calls in production code
//!
//! ## Quick Start
//!
//! ```no_run
//! use workout_checklist_core::{create_app, checklist_add, checklist_load};
//! use std::ffi::CString;
//!
//! let config = CString::new(r#"{"db_name":"my_workouts"}"#).unwrap();
//! let app = create_app(config.as_ptr());
//!
//! let day = CString::new("Monday").unwrap();
//! let item = CString::new(r#"{"name":"Push-ups","sets":3,"reps":[10,10,8]}"#).unwrap();
//! let result = checklist_add(app, day.as_ptr(), item.as_ptr());
//! let all = checklist_load(app, day.as_ptr());
//! ```
//!
//! ## FFI Functions
//!
//! - [`create_app`] - Open storage and return a handle
//! - [`weekly_schedule`] - The week overview shown on the home tab
//! - [`app_profile`] - The injected user profile
//! - [`checklist_load`] - Read a day's checklist
//! - [`checklist_add`] - Append an item
//! - [`checklist_update`] - Replace an item in place
//! - [`checklist_toggle`] - Flip an item's checked flag
//! - [`checklist_remove`] - Delete an item
//! - [`close_app`] - Flush and release the handle
//! - [`free_response`] - Release a string returned by any call above

pub mod app_state;
pub mod config;
pub mod draft;
pub mod error;
pub mod line_item;
pub mod schedule;
pub mod storage;
pub mod store;
mod app_response;

pub use crate::app_response::AppResponse;

use crate::app_state::AppState;
use crate::config::AppConfig;
use crate::line_item::LineItem;
use crate::schedule::Weekday;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use log::{info, warn};

/// Opens (or creates) the device database and returns a handle for later calls.
///
/// # Parameters
///
/// * `config_json` - JSON [`AppConfig`]; null or empty uses the defaults
///
/// # Returns
///
/// A pointer to the [`AppState`], or null if the config is invalid or the database
/// cannot be opened. Release it with [`close_app`].
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn create_app(config_json: *const c_char) -> *mut AppState {
    let raw = if config_json.is_null() {
        String::new()
    } else {
        match unsafe { CStr::from_ptr(config_json).to_str() } {
            Ok(s) => s.to_string(),
            Err(e) => {
                warn!("Invalid UTF-8 in config parameter: {e}");
                return std::ptr::null_mut();
            }
        }
    };

    let config = match AppConfig::from_json(&raw) {
        Ok(c) => c,
        Err(e) => {
            warn!("Rejected config: {e}");
            return std::ptr::null_mut();
        }
    };

    info!("Opening checklist database '{}'", config.db_name);

    match AppState::init(config) {
        Ok(state) => Box::into_raw(Box::new(state)),
        Err(e) => {
            warn!("Failed to initialize app state: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Returns the weekly schedule as a JSON array of `{day, summary, kind}`.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn weekly_schedule(app: *mut AppState) -> *const c_char {
    let app = match state_ref(app, "weekly_schedule") {
        Ok(a) => a,
        Err(e) => return e,
    };
    ok_json(&app.schedule().days)
}

/// Returns the profile the host injected through the config.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn app_profile(app: *mut AppState) -> *const c_char {
    let app = match state_ref(app, "app_profile") {
        Ok(a) => a,
        Err(e) => return e,
    };
    ok_json(&app.config().profile)
}

/// Reads a day's checklist. Never fails on a corrupt record; it loads as `[]`.
///
/// # Parameters
///
/// * `app` - Handle from [`create_app`]
/// * `day` - Weekday name, case-insensitive
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn checklist_load(app: *mut AppState, day: *const c_char) -> *const c_char {
    let (app, day) = match app_and_day(app, day, "checklist_load") {
        Ok(v) => v,
        Err(e) => return e,
    };
    let store = app.checklist(day);
    let items = app.block_on(store.load());
    ok_json(&items)
}

/// Appends an item to a day's checklist.
///
/// # JSON Format
///
/// Exercise days:
/// ```json
/// {"name": "Squats", "sets": 2, "reps": [12, 10]}
/// ```
///
/// Rest day:
/// ```json
/// {"text": "Foam roll"}
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn checklist_add(
    app: *mut AppState,
    day: *const c_char,
    item_json: *const c_char,
) -> *const c_char {
    let (app, day) = match app_and_day(app, day, "checklist_add") {
        Ok(v) => v,
        Err(e) => return e,
    };
    let item = match parse_item(item_json) {
        Ok(i) => i,
        Err(e) => return e,
    };

    let store = app.checklist(day);
    items_response(app.block_on(store.add(item)))
}

/// Replaces the item at `index`. The replacement is stored unchecked.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn checklist_update(
    app: *mut AppState,
    day: *const c_char,
    index: i64,
    item_json: *const c_char,
) -> *const c_char {
    let (app, day) = match app_and_day(app, day, "checklist_update") {
        Ok(v) => v,
        Err(e) => return e,
    };
    let item = match parse_item(item_json) {
        Ok(i) => i,
        Err(e) => return e,
    };
    let index = match to_index(index) {
        Ok(i) => i,
        Err(e) => return e,
    };

    let store = app.checklist(day);
    items_response(app.block_on(store.update(index, item)))
}

#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn checklist_toggle(app: *mut AppState, day: *const c_char, index: i64) -> *const c_char {
    let (app, day) = match app_and_day(app, day, "checklist_toggle") {
        Ok(v) => v,
        Err(e) => return e,
    };
    let index = match to_index(index) {
        Ok(i) => i,
        Err(e) => return e,
    };

    let store = app.checklist(day);
    items_response(app.block_on(store.toggle(index)))
}

/// Deletes the item at `index`. The host asks the user to confirm first.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn checklist_remove(app: *mut AppState, day: *const c_char, index: i64) -> *const c_char {
    let (app, day) = match app_and_day(app, day, "checklist_remove") {
        Ok(v) => v,
        Err(e) => return e,
    };
    let index = match to_index(index) {
        Ok(i) => i,
        Err(e) => return e,
    };

    let store = app.checklist(day);
    items_response(app.block_on(store.remove(index)))
}

/// Flushes storage and releases the handle. The pointer must not be used afterwards.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn close_app(app: *mut AppState) -> *const c_char {
    if app.is_null() {
        let error = AppResponse::BadRequest("Null state pointer passed to close_app".to_string());
        return response_to_c_string(&error);
    }

    let state = unsafe { Box::from_raw(app) };
    let response = match state.close() {
        Ok(()) => AppResponse::success("Database closed successfully"),
        Err(e) => AppResponse::from(e),
    };
    drop(state);
    response_to_c_string(&response)
}

/// Releases a string returned by this library.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn free_response(ptr: *const c_char) {
    if ptr.is_null() {
        return;
    }
    drop(unsafe { CString::from_raw(ptr as *mut c_char) });
}

fn state_ref<'a>(app: *mut AppState, caller: &str) -> Result<&'a AppState, *const c_char> {
    match unsafe { app.as_ref() } {
        Some(a) => Ok(a),
        None => {
            let error = AppResponse::BadRequest(format!("Null state pointer passed to {caller}"));
            Err(response_to_c_string(&error))
        }
    }
}

fn app_and_day<'a>(
    app: *mut AppState,
    day: *const c_char,
    caller: &str,
) -> Result<(&'a AppState, Weekday), *const c_char> {
    let app = state_ref(app, caller)?;
    let day_str = c_ptr_to_string(day, "day")?;
    match day_str.parse::<Weekday>() {
        Ok(d) => Ok((app, d)),
        Err(e) => Err(response_to_c_string(&AppResponse::NotFound(e))),
    }
}

fn parse_item(item_json: *const c_char) -> Result<LineItem, *const c_char> {
    let json = c_ptr_to_string(item_json, "JSON")?;
    serde_json::from_str(&json).map_err(|e| {
        let error = AppResponse::SerializationError(format!("Invalid item JSON: {e}"));
        response_to_c_string(&error)
    })
}

fn to_index(index: i64) -> Result<usize, *const c_char> {
    usize::try_from(index).map_err(|_| {
        let error = AppResponse::IndexOutOfRange(format!("Index {index} is negative"));
        response_to_c_string(&error)
    })
}

fn items_response(result: error::Result<Vec<LineItem>>) -> *const c_char {
    match result {
        Ok(items) => ok_json(&items),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

fn ok_json<T: serde::Serialize + ?Sized>(value: &T) -> *const c_char {
    match serde_json::to_string(value) {
        Ok(json) => response_to_c_string(&AppResponse::Ok(json)),
        Err(e) => response_to_c_string(&AppResponse::from(e)),
    }
}

/// Converts an [`AppResponse`] to a C string the host frees with [`free_response`].
///
/// Returns a null pointer if serialization or C string creation fails.
fn response_to_c_string(response: &AppResponse) -> *const c_char {
    let json = match serde_json::to_string(response) {
        Ok(j) => j,
        Err(e) => {
            warn!("Error serializing response: {e}");
            return std::ptr::null();
        }
    };

    match CString::new(json) {
        Ok(c_str) => c_str.into_raw(),
        Err(e) => {
            warn!("Error creating CString: {e}");
            std::ptr::null()
        }
    }
}

/// Converts a C string pointer to a Rust String, turning null pointers and invalid UTF-8
/// into a `BadRequest` response.
fn c_ptr_to_string(ptr: *const c_char, field_name: &str) -> Result<String, *const c_char> {
    if ptr.is_null() {
        let error = AppResponse::BadRequest(format!("Null {field_name} pointer"));
        return Err(response_to_c_string(&error));
    }

    match unsafe { CStr::from_ptr(ptr).to_str() } {
        Ok(s) => Ok(s.to_string()),
        Err(e) => {
            let error = AppResponse::BadRequest(format!("Invalid UTF-8 in {field_name}: {e}"));
            Err(response_to_c_string(&error))
        }
    }
}
