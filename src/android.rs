//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;

use crate::{render_json_to_instructions, render_json_to_svg};

/// Read a nullable Java string.
fn optional_string(env: &mut JNIEnv, s: &JString) -> Option<String> {
    if s.is_null() {
        None
    } else {
        env.get_string(s).ok().map(|s| s.into())
    }
}

/// Render a rudiment to SVG.
///
/// Called from Kotlin as:
///   external fun renderSvg(configJson: String?, layoutJson: String?, rudimentsJson: String?): String?
#[no_mangle]
pub extern "system" fn Java_com_rudimentlib_app_RudimentLib_renderSvg(
    mut env: JNIEnv,
    _class: JClass,
    config_json: JString,
    layout_json: JString,
    rudiments_json: JString,
) -> jstring {
    let config = optional_string(&mut env, &config_json);
    let layout = optional_string(&mut env, &layout_json);
    let rudiments = optional_string(&mut env, &rudiments_json);

    match render_json_to_svg(config.as_deref(), layout.as_deref(), rudiments.as_deref()) {
        Ok(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            log::error!("renderSvg failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Render a rudiment to a JSON array of draw instructions, for hosts that
/// paint on a native canvas.
///
/// Called from Kotlin as:
///   external fun renderInstructions(configJson: String?, layoutJson: String?, rudimentsJson: String?): String?
#[no_mangle]
pub extern "system" fn Java_com_rudimentlib_app_RudimentLib_renderInstructions(
    mut env: JNIEnv,
    _class: JClass,
    config_json: JString,
    layout_json: JString,
    rudiments_json: JString,
) -> jstring {
    let config = optional_string(&mut env, &config_json);
    let layout = optional_string(&mut env, &layout_json);
    let rudiments = optional_string(&mut env, &rudiments_json);

    match render_json_to_instructions(config.as_deref(), layout.as_deref(), rudiments.as_deref()) {
        Ok(json) => match env.new_string(&json) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            log::error!("renderInstructions failed: {e}");
            std::ptr::null_mut()
        }
    }
}
