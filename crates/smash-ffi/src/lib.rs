//! C FFI bindings for smash-core
//!
//! This crate provides a C-compatible API so voice front ends written in
//! other languages can ask for narrated frame data.

use smash_core::{answer, classify, MoveQuery, MovesetStore};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

/// Read an optional C string; null and invalid UTF-8 both become None
unsafe fn opt_str(s: *const c_char) -> Option<String> {
    if s.is_null() {
        return None;
    }
    CStr::from_ptr(s).to_str().ok().map(str::to_string)
}

fn into_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c_str) => c_str.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Answer a character/move question
///
/// Returns the response (`title`, `speech`, `reprompt`) as a JSON string.
/// `character` and `move_key` may be null when the user did not name them.
///
/// # Safety
/// - `store_dir` must be a valid null-terminated string
/// - `character` and `move_key` must be null or valid null-terminated strings
/// - Returns null on error
/// - Caller must free the returned string with `smash_free_string`
#[no_mangle]
pub unsafe extern "C" fn smash_answer(
    store_dir: *const c_char,
    character: *const c_char,
    move_key: *const c_char,
) -> *mut c_char {
    let Some(store_dir) = opt_str(store_dir) else {
        return ptr::null_mut();
    };

    let store = MovesetStore::new(store_dir);
    let query = MoveQuery {
        character: opt_str(character),
        move_key: opt_str(move_key),
    };

    match serde_json::to_string(&answer(&store, &query)) {
        Ok(json) => into_c_string(json),
        Err(_) => ptr::null_mut(),
    }
}

/// Classify a raw move label
///
/// Returns `{"group": ..., "modifier": ...}` as a JSON string.
///
/// # Safety
/// - `label` must be a valid null-terminated string
/// - Returns null on error
/// - Caller must free the returned string with `smash_free_string`
#[no_mangle]
pub unsafe extern "C" fn smash_classify(label: *const c_char) -> *mut c_char {
    let Some(label) = opt_str(label) else {
        return ptr::null_mut();
    };

    match serde_json::to_string(&classify(&label)) {
        Ok(json) => into_c_string(json),
        Err(_) => ptr::null_mut(),
    }
}

/// Free a string returned by this library
///
/// # Safety
/// - `s` must be a pointer returned by a smash function or null
#[no_mangle]
pub unsafe extern "C" fn smash_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_roundtrip_through_c() {
        let label = CString::new("Ftilt (up angled)").unwrap();
        unsafe {
            let out = smash_classify(label.as_ptr());
            assert!(!out.is_null());
            let json = CStr::from_ptr(out).to_str().unwrap().to_string();
            smash_free_string(out);
            assert_eq!(json, r#"{"group":"forward tilt","modifier":"up angled"}"#);
        }
    }

    #[test]
    fn test_answer_with_missing_move() {
        let store = CString::new("no-such-dir").unwrap();
        let character = CString::new("mario").unwrap();
        unsafe {
            let out = smash_answer(store.as_ptr(), character.as_ptr(), ptr::null());
            assert!(!out.is_null());
            let json = CStr::from_ptr(out).to_str().unwrap().to_string();
            smash_free_string(out);
            assert!(json.contains("Which of Mario's moves?"));
        }
    }

    #[test]
    fn test_null_store_returns_null() {
        unsafe {
            assert!(smash_answer(ptr::null(), ptr::null(), ptr::null()).is_null());
        }
    }
}
