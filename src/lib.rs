pub mod audio;
pub mod bmi;
pub mod color;
pub mod datecalc;
pub mod encoding;
pub mod error;
pub mod finance;
pub mod json;
pub mod password;
pub mod text;
pub mod timer;
pub mod units;

use crate::audio::AudioBuffer;
use crate::error::ToolError;
use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the toolhub-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

fn parse_iso_date(field: &'static str, input: &str) -> Result<NaiveDate, ToolError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| ToolError::InvalidFormat(format!("{field} '{input}' is not a YYYY-MM-DD date")))
}

fn channels_from_js(channels: JsValue) -> Result<Vec<Vec<f32>>, JsValue> {
    serde_wasm_bindgen::from_value(channels)
        .map_err(|e| JsValue::from_str(&format!("channel data: {e}")))
}

/// WASM-exposed: encode float PCM channels as a 16-bit WAV file.
/// `channels` is an array of per-channel Float32Array sample buffers.
#[wasm_bindgen]
pub fn encode_wav(sample_rate: u32, channels: JsValue) -> Result<Vec<u8>, JsValue> {
    let buffer = AudioBuffer::new(sample_rate, channels_from_js(channels)?)
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    audio::wav::encode(&buffer).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: cut a time window out of decoded audio and encode the
/// result as WAV, ready for download.
#[wasm_bindgen]
pub fn trim_audio_wav(
    sample_rate: u32,
    channels: JsValue,
    start_seconds: f64,
    end_seconds: f64,
) -> Result<Vec<u8>, JsValue> {
    let buffer = AudioBuffer::new(sample_rate, channels_from_js(channels)?)
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let trimmed = audio::trim::trim(&buffer, start_seconds, end_seconds)
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    audio::wav::encode(&trimmed).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: monthly payment breakdown for an amortized loan.
#[wasm_bindgen]
pub fn calculate_emi(
    principal: f64,
    annual_rate_pct: f64,
    term_months: u32,
) -> Result<JsValue, JsValue> {
    let breakdown = finance::emi(&finance::LoanTerms {
        principal,
        annual_rate_pct,
        term_months,
    })
    .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    serde_wasm_bindgen::to_value(&breakdown).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: future value of a monthly investment plan.
#[wasm_bindgen]
pub fn calculate_sip(
    monthly_amount: f64,
    annual_rate_pct: f64,
    term_months: u32,
) -> Result<JsValue, JsValue> {
    let projection = finance::sip(&finance::SipTerms {
        monthly_amount,
        annual_rate_pct,
        term_months,
    })
    .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    serde_wasm_bindgen::to_value(&projection).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: age between two `YYYY-MM-DD` dates. The page passes its
/// own notion of "today" so the core stays clock-free.
#[wasm_bindgen]
pub fn calculate_age(birth: &str, today: &str) -> Result<JsValue, JsValue> {
    let birth = parse_iso_date("birth date", birth).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let today = parse_iso_date("today", today).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let span =
        datecalc::between(birth, today).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    serde_wasm_bindgen::to_value(&span).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: convert a value between two units of a category.
#[wasm_bindgen]
pub fn convert_unit(
    category: &str,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<f64, JsValue> {
    let category: units::Category = category
        .parse()
        .map_err(|e: ToolError| JsValue::from_str(&format!("{e}")))?;
    units::convert(category, from_unit, to_unit, value)
        .map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: unit names of a category, for the from/to dropdowns.
#[wasm_bindgen]
pub fn unit_names(category: &str) -> Result<JsValue, JsValue> {
    let category: units::Category = category
        .parse()
        .map_err(|e: ToolError| JsValue::from_str(&format!("{e}")))?;
    serde_wasm_bindgen::to_value(&category.unit_names())
        .map_err(|e| JsValue::from_str(&format!("{e}")))
}

#[derive(Serialize)]
struct ColorInfo {
    hex: String,
    rgb: color::Rgb,
    hsl: color::Hsl,
}

/// WASM-exposed: all three representations of a hex colour.
#[wasm_bindgen]
pub fn color_info(hex: &str) -> Result<JsValue, JsValue> {
    let rgb = color::hex_to_rgb(hex).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let info = ColorInfo {
        hex: color::rgb_to_hex(rgb),
        rgb,
        hsl: color::rgb_to_hsl(rgb),
    };
    serde_wasm_bindgen::to_value(&info).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: live word/character/reading-time counts.
#[wasm_bindgen]
pub fn word_stats(input: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&text::word_stats(input))
        .map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: Base64-encode text.
#[wasm_bindgen]
pub fn encode_base64(input: &str) -> String {
    encoding::encode_text(input)
}

/// WASM-exposed: decode Base64 back to text.
#[wasm_bindgen]
pub fn decode_base64(input: &str) -> Result<String, JsValue> {
    encoding::decode_text(input).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: pretty-print (or minify) a JSON document.
#[wasm_bindgen]
pub fn format_json(input: &str, minify: bool) -> Result<String, JsValue> {
    let result = if minify {
        json::minify(input)
    } else {
        json::format(input)
    };
    result.map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: check a JSON document for well-formedness.
#[wasm_bindgen]
pub fn validate_json(input: &str) -> Result<(), JsValue> {
    json::validate(input).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: generate a random password from the selected sets.
#[wasm_bindgen]
pub fn generate_password(
    length: u32,
    uppercase: bool,
    lowercase: bool,
    digits: bool,
    symbols: bool,
) -> Result<String, JsValue> {
    let options = password::PasswordOptions {
        length: length as usize,
        uppercase,
        lowercase,
        digits,
        symbols,
    };
    password::generate(&options, &mut rand::thread_rng())
        .map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: BMI value and category from weight (kg) and height (cm).
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<JsValue, JsValue> {
    let reading = bmi::body_mass_index(weight_kg, height_cm)
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    serde_wasm_bindgen::to_value(&reading).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: total seconds for the timer's H/M/S fields.
#[wasm_bindgen]
pub fn timer_duration(hours: u32, minutes: u32, seconds: u32) -> Result<u32, JsValue> {
    timer::duration_seconds(hours, minutes, seconds).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: format a second count as `HH:MM:SS` for the display.
#[wasm_bindgen]
pub fn format_duration(total_seconds: u32) -> String {
    timer::format_hms(total_seconds)
}
