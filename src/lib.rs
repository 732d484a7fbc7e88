//! rudimentlib — drum rudiment notation layout and rendering.
//!
//! Takes a sticking pattern (e.g. a paradiddle), expands it into timed hits,
//! lays the hits out on a single-line percussion staff with up-stems, beams
//! and accents, and emits primitive draw instructions or a finished SVG.
//!
//! # Example
//! ```
//! use rudimentlib::{render_to_svg, LayoutConfig, RenderConfig, RudimentDictionary};
//!
//! let config = RenderConfig::from_json(r#"{"subdivision": "16", "bars": 1}"#).unwrap();
//! let svg = render_to_svg(&config, &LayoutConfig::default(), &RudimentDictionary::default())
//!     .unwrap();
//! assert!(svg.contains("<ellipse"));
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod renderer;
pub mod rudiments;
pub mod sequence;

#[cfg(target_os = "android")]
pub mod android;

pub use config::{LayoutConfig, RenderConfig};
pub use error::NotationError;
pub use model::*;
pub use renderer::{
    instructions_to_json, render, render_instructions, render_to_surface, render_to_svg,
    DrawInstruction, DrawingSurface, RenderStatus, StatusIndicator, SvgSurface,
};
pub use rudiments::{rotate_sticking, RudimentDictionary};
pub use sequence::generate;

/// Decode the three optional JSON payloads a host sends. Missing payloads
/// use defaults: the paradiddle, one bar of sixteenths, the reference look
/// and the built-in dictionary.
pub fn decode_request(
    config_json: Option<&str>,
    layout_json: Option<&str>,
    rudiments_json: Option<&str>,
) -> Result<(RenderConfig, LayoutConfig, RudimentDictionary), NotationError> {
    let config = config_json
        .map(RenderConfig::from_json)
        .transpose()?
        .unwrap_or_default();
    let layout = layout_json
        .map(LayoutConfig::from_json)
        .transpose()?
        .unwrap_or_default();
    let rudiments = rudiments_json
        .map(RudimentDictionary::from_json)
        .transpose()?
        .unwrap_or_default();
    Ok((config, layout, rudiments))
}

/// Render SVG from JSON payloads. See `decode_request`.
pub fn render_json_to_svg(
    config_json: Option<&str>,
    layout_json: Option<&str>,
    rudiments_json: Option<&str>,
) -> Result<String, NotationError> {
    let (config, layout, rudiments) = decode_request(config_json, layout_json, rudiments_json)?;
    render_to_svg(&config, &layout, &rudiments)
}

/// Render a JSON instruction list from JSON payloads. See `decode_request`.
pub fn render_json_to_instructions(
    config_json: Option<&str>,
    layout_json: Option<&str>,
    rudiments_json: Option<&str>,
) -> Result<String, NotationError> {
    let (config, layout, rudiments) = decode_request(config_json, layout_json, rudiments_json)?;
    let instructions = render_instructions(&config, &layout, &rudiments)?;
    instructions_to_json(&instructions)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Read an optional C string. Null means "not provided"; invalid UTF-8 is
/// reported as `None` in the outer option.
unsafe fn optional_str<'a>(ptr: *const c_char) -> Option<Option<&'a str>> {
    if ptr.is_null() {
        return Some(None);
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok().map(Some)
}

fn into_c_string(result: Result<String, NotationError>) -> *mut c_char {
    match result {
        Ok(s) => match CString::new(s) {
            Ok(c) => c.into_raw(),
            Err(e) => {
                log::error!("Render output has an interior NUL at byte {}", e.nul_position());
                std::ptr::null_mut()
            }
        },
        Err(e) => {
            log::error!("Render failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Render a rudiment to SVG and return it as a C string.
/// The caller must free the returned string with `rudimentlib_free_string`.
///
/// Each argument is a JSON document or null for defaults. Returns null on
/// invalid input or if the notehead geometry is degenerate.
///
/// # Safety
/// Each non-null pointer must be a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn rudimentlib_render_svg(
    config_json: *const c_char,
    layout_json: *const c_char,
    rudiments_json: *const c_char,
) -> *mut c_char {
    let inputs = unsafe {
        (
            optional_str(config_json),
            optional_str(layout_json),
            optional_str(rudiments_json),
        )
    };
    let (Some(config), Some(layout), Some(rudiments)) = inputs else {
        return std::ptr::null_mut();
    };
    into_c_string(render_json_to_svg(config, layout, rudiments))
}

/// Render a rudiment to a JSON array of draw instructions.
/// The caller must free the returned string with `rudimentlib_free_string`.
///
/// # Safety
/// Each non-null pointer must be a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn rudimentlib_render_instructions(
    config_json: *const c_char,
    layout_json: *const c_char,
    rudiments_json: *const c_char,
) -> *mut c_char {
    let inputs = unsafe {
        (
            optional_str(config_json),
            optional_str(layout_json),
            optional_str(rudiments_json),
        )
    };
    let (Some(config), Some(layout), Some(rudiments)) = inputs else {
        return std::ptr::null_mut();
    };
    into_c_string(render_json_to_instructions(config, layout, rudiments))
}

/// Free a string previously returned by rudimentlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a rudimentlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn rudimentlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
