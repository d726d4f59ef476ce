//! Options and ranges offered by the wizard step editors.
//!
//! The configuration store accepts any value; these limits apply only where a
//! customer picks values, which is the API edge.

use std::ops::{RangeInclusive, Rem, Sub};

use super::configuration::{ConfigUpdate, LogoUpload};

pub const BODY_STYLES: &[&str] = &["Sedan", "SUV", "Coupe", "Convertible", "Hatchback", "Pickup"];
pub const BASE_VARIANTS: &[&str] = &["Basic", "Sport", "Electric", "Luxury"];
pub const TRANSMISSIONS: &[&str] = &["Manual", "Automatic", "Dual Clutch"];
pub const BUDGET_RANGE: RangeInclusive<u64> = 500_000..=20_000_000;
pub const BUDGET_STEP: u64 = 50_000;

pub const ENGINE_TYPES: &[&str] = &["Petrol", "Diesel", "Hybrid", "Electric", "Hydrogen"];
pub const ENGINE_SIZES: &[&str] = &["1000cc", "1200cc", "1500cc", "2000cc", "2500cc", "3000cc+"];
pub const DRIVE_TYPES: &[&str] = &["FWD", "RWD", "AWD"];
pub const EV_BATTERIES: &[&str] = &["30kWh", "50kWh", "70kWh", "100kWh"];
pub const MAX_SPEED_RANGE: RangeInclusive<u32> = 100..=400;
pub const MAX_SPEED_STEP: u32 = 5;
pub const RANGE_KM: RangeInclusive<u32> = 100..=800;
pub const RANGE_STEP: u32 = 10;

pub const PAINT_FINISHES: &[&str] = &["Matte", "Gloss", "Metallic", "Chrome"];
pub const ROOF_TYPES: &[&str] = &["Body Color", "Glass", "Carbon"];
pub const SPOILERS: &[&str] = &["None", "Fixed", "Retractable"];
pub const RIM_STYLES: &[&str] = &["Classic", "Sport", "Premium", "Custom"];
pub const RIM_SIZES: &[u32] = &[16, 17, 18, 19, 20, 21, 22];
pub const TYRES: &[&str] = &["Normal", "Sport", "Off-road"];
pub const DOOR_HANDLES: &[&str] = &["Standard", "Hidden"];
pub const EXHAUST_STYLES: &[&str] = &["Single", "Dual", "Quad", "Hidden"];

pub const UPHOLSTERIES: &[&str] = &["Fabric", "Leather", "Vegan Leather", "Alcantara"];
pub const SEAT_TYPES: &[&str] = &["Standard", "Sport", "Bucket", "Heated+Ventilated"];
pub const AMBIENT_LIGHTINGS: &[&str] = &["None", "Single Color", "Multicolor (RGB)"];
pub const DASHBOARD_LAYOUTS: &[&str] = &["Classic", "Digital", "AI Cockpit"];
pub const CABIN_COLOR_COMBOS: &[&str] = &["Black/Red", "Beige/Brown", "Grey/Blue", "White/Black"];
pub const STEERINGS: &[&str] = &["Normal", "Flat-bottom", "Carbon Finish"];
pub const SUNROOFS: &[&str] = &["None", "Panoramic", "Sliding"];

pub const INFOTAINMENTS: &[&str] = &["8\u{201d}", "12\u{201d}", "Full HUD"];
pub const CONNECTIVITY_OPTIONS: &[&str] = &["Android Auto", "Apple CarPlay", "5G Telematics"];
pub const SMART_TECH_OPTIONS: &[&str] = &[
    "AI Assistant",
    "Heads-Up Display",
    "360° Camera",
    "Adaptive Cruise Control",
    "Auto Emergency Braking",
    "Auto Park Assist",
    "Rain Sensing Wipers",
    "Blind Spot Monitoring",
];

pub const AIRBAG_OPTIONS: &[u32] = &[2, 4, 6, 8, 10];
pub const ANTI_THEFT_OPTIONS: &[&str] = &["GPS", "Biometric", "Keyless Lock"];

pub const NUMBER_PLATE_STYLES: &[&str] = &["Standard", "Sport", "Custom", "Vintage"];
pub const LOGO_CONTENT_TYPES: &[&str] = &["image/png", "image/jpeg", "image/svg+xml"];

/// Checks an update against the choices a step editor presents.
///
/// Returns a human readable message naming the rejected value.
pub fn validate_update(update: &ConfigUpdate) -> Result<(), String> {
    use ConfigUpdate::*;
    match update {
        BodyStyle(v) => one_of("body style", v, BODY_STYLES),
        BaseVariant(v) => one_of("base variant", v, BASE_VARIANTS),
        Budget(v) => slider("budget", *v, &BUDGET_RANGE, BUDGET_STEP),
        Transmission(v) => one_of("transmission", v, TRANSMISSIONS),
        EngineType(v) => one_of("engine type", v, ENGINE_TYPES),
        EngineSize(v) => one_of("engine size", v, ENGINE_SIZES),
        DriveType(v) => one_of("drive type", v, DRIVE_TYPES),
        MaxSpeed(v) => slider("max speed", *v, &MAX_SPEED_RANGE, MAX_SPEED_STEP),
        EvBattery(v) => one_of("battery", v, EV_BATTERIES),
        Range(v) => slider("range", *v, &RANGE_KM, RANGE_STEP),
        ExteriorColor(v) => hex_color(v),
        PaintFinish(v) => one_of("paint finish", v, PAINT_FINISHES),
        RoofType(v) => one_of("roof type", v, ROOF_TYPES),
        Spoiler(v) => one_of("spoiler", v, SPOILERS),
        Rims(v) => one_of("rim style", v, RIM_STYLES),
        RimSize(v) => listed("rim size", *v, RIM_SIZES),
        Tyres(v) => one_of("tyres", v, TYRES),
        DoorHandles(v) => one_of("door handles", v, DOOR_HANDLES),
        ExhaustStyle(v) => one_of("exhaust style", v, EXHAUST_STYLES),
        Upholstery(v) => one_of("upholstery", v, UPHOLSTERIES),
        SeatType(v) => one_of("seat type", v, SEAT_TYPES),
        AmbientLighting(v) => one_of("ambient lighting", v, AMBIENT_LIGHTINGS),
        DashboardLayout(v) => one_of("dashboard layout", v, DASHBOARD_LAYOUTS),
        CabinColorCombo(v) => one_of("cabin colour combo", v, CABIN_COLOR_COMBOS),
        Steering(v) => one_of("steering", v, STEERINGS),
        Sunroof(v) => one_of("sunroof", v, SUNROOFS),
        Infotainment(v) => one_of("infotainment", v, INFOTAINMENTS),
        AddConnectivity(v) | RemoveConnectivity(v) => {
            one_of("connectivity option", v, CONNECTIVITY_OPTIONS)
        }
        AddSmartTech(v) | RemoveSmartTech(v) => one_of("smart-tech feature", v, SMART_TECH_OPTIONS),
        Airbags(v) => listed("airbag count", *v, AIRBAG_OPTIONS),
        AntiTheft(v) => one_of("anti-theft system", v, ANTI_THEFT_OPTIONS),
        CustomLogo(Some(logo)) => logo_upload(logo),
        NumberPlate(v) => one_of("number plate style", v, NUMBER_PLATE_STYLES),
        Turbo(_) | ZeroToHundred(_) | FastCharging(_) | WirelessCharging(_)
        | VoiceAssistant(_) | CrashSos(_) | Tpms(_) | Isofix(_) | TowHitch(_) | RoofRack(_)
        | CustomLogo(None) | SpecialRequests(_) => Ok(()),
    }
}

fn one_of(label: &str, value: &str, options: &[&str]) -> Result<(), String> {
    if options.contains(&value) {
        Ok(())
    } else {
        Err(format!("unknown {label} '{value}'"))
    }
}

fn listed(label: &str, value: u32, options: &[u32]) -> Result<(), String> {
    if options.contains(&value) {
        Ok(())
    } else {
        Err(format!("{label} {value} is not offered"))
    }
}

fn within<T>(label: &str, value: T, range: &RangeInclusive<T>) -> Result<(), String>
where
    T: PartialOrd + std::fmt::Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "{label} {value} is outside {}..={}",
            range.start(),
            range.end()
        ))
    }
}

/// A slider value: inside the range and on a step counted from its start.
fn slider<T>(label: &str, value: T, range: &RangeInclusive<T>, step: T) -> Result<(), String>
where
    T: Copy + Default + PartialOrd + std::fmt::Display + Sub<Output = T> + Rem<Output = T>,
{
    within(label, value, range)?;
    if (value - *range.start()) % step != T::default() {
        return Err(format!("{label} must move in steps of {step}"));
    }
    Ok(())
}

fn hex_color(value: &str) -> Result<(), String> {
    let digits = value.strip_prefix('#').unwrap_or("");
    if matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(format!("'{value}' is not a hex colour"))
    }
}

fn logo_upload(logo: &LogoUpload) -> Result<(), String> {
    if logo.file_name.trim().is_empty() {
        return Err("logo file name is empty".to_string());
    }
    one_of("logo content type", &logo.content_type, LOGO_CONTENT_TYPES)
}
