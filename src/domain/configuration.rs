use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_BUDGET: u64 = 500_000;
pub const DEFAULT_EXTERIOR_COLOR: &str = "#007BFF";

/// Metadata of a file the customer attached on the add-ons step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogoUpload {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

/// The in-progress vehicle configuration edited by the wizard.
///
/// Every field has a default, so a freshly created value is always complete
/// and renderable before any step has been visited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarConfiguration {
    // Body & model
    pub body_style: String,
    pub base_variant: String,
    pub budget: u64,
    pub transmission: String,
    // Engine & performance
    pub engine_type: String,
    pub engine_size: String,
    pub drive_type: String,
    pub turbo: bool,
    pub max_speed: u32,
    pub zero_to_hundred: String,
    pub ev_battery: String,
    pub fast_charging: bool,
    pub range: u32,
    // Exterior
    pub exterior_color: String,
    pub paint_finish: String,
    pub roof_type: String,
    pub spoiler: String,
    pub rims: String,
    pub rim_size: u32,
    pub tyres: String,
    pub door_handles: String,
    pub exhaust_style: String,
    // Interior
    pub upholstery: String,
    pub seat_type: String,
    pub ambient_lighting: String,
    pub dashboard_layout: String,
    pub cabin_color_combo: String,
    pub steering: String,
    pub sunroof: String,
    // Technology
    pub infotainment: String,
    pub wireless_charging: bool,
    pub connectivity: Vec<String>,
    pub voice_assistant: bool,
    pub smart_tech: Vec<String>,
    // Safety
    pub airbags: u32,
    pub anti_theft: String,
    #[serde(rename = "crashSOS")]
    pub crash_sos: bool,
    pub tpms: bool,
    pub isofix: bool,
    // Add-ons
    pub tow_hitch: bool,
    pub roof_rack: bool,
    pub custom_logo: Option<LogoUpload>,
    pub number_plate: String,
    pub special_requests: String,
}

impl Default for CarConfiguration {
    fn default() -> Self {
        Self {
            body_style: String::new(),
            base_variant: String::new(),
            budget: DEFAULT_BUDGET,
            transmission: String::new(),
            engine_type: String::new(),
            engine_size: String::new(),
            drive_type: String::new(),
            turbo: false,
            max_speed: 200,
            zero_to_hundred: String::new(),
            ev_battery: String::new(),
            fast_charging: false,
            range: 200,
            exterior_color: DEFAULT_EXTERIOR_COLOR.to_string(),
            paint_finish: String::new(),
            roof_type: String::new(),
            spoiler: String::new(),
            rims: String::new(),
            rim_size: 18,
            tyres: String::new(),
            door_handles: String::new(),
            exhaust_style: String::new(),
            upholstery: String::new(),
            seat_type: String::new(),
            ambient_lighting: String::new(),
            dashboard_layout: String::new(),
            cabin_color_combo: String::new(),
            steering: String::new(),
            sunroof: String::new(),
            infotainment: String::new(),
            wireless_charging: false,
            connectivity: Vec::new(),
            voice_assistant: false,
            smart_tech: Vec::new(),
            airbags: 2,
            anti_theft: String::new(),
            crash_sos: false,
            tpms: false,
            isofix: false,
            tow_hitch: false,
            roof_rack: false,
            custom_logo: None,
            number_plate: String::new(),
            special_requests: String::new(),
        }
    }
}

impl CarConfiguration {
    pub fn set(&self, field: SetField) -> &[String] {
        match field {
            SetField::Connectivity => &self.connectivity,
            SetField::SmartTech => &self.smart_tech,
        }
    }

    fn set_mut(&mut self, field: SetField) -> &mut Vec<String> {
        match field {
            SetField::Connectivity => &mut self.connectivity,
            SetField::SmartTech => &mut self.smart_tech,
        }
    }

    /// Adds `value` to a set-valued field. Already present values are not
    /// duplicated.
    pub fn insert_into(&mut self, field: SetField, value: String) {
        let set = self.set_mut(field);
        if !set.contains(&value) {
            set.push(value);
        }
    }

    /// Removes `value` from a set-valued field; absent values are ignored.
    pub fn remove_from(&mut self, field: SetField, value: &str) {
        self.set_mut(field).retain(|v| v != value);
    }

    /// Applies a single field change. Untouched fields keep their value.
    pub fn apply(&mut self, update: ConfigUpdate) {
        use ConfigUpdate::*;
        match update {
            BodyStyle(v) => self.body_style = v,
            BaseVariant(v) => self.base_variant = v,
            Budget(v) => self.budget = v,
            Transmission(v) => self.transmission = v,
            EngineType(v) => self.engine_type = v,
            EngineSize(v) => self.engine_size = v,
            DriveType(v) => self.drive_type = v,
            Turbo(v) => self.turbo = v,
            MaxSpeed(v) => self.max_speed = v,
            ZeroToHundred(v) => self.zero_to_hundred = v,
            EvBattery(v) => self.ev_battery = v,
            FastCharging(v) => self.fast_charging = v,
            Range(v) => self.range = v,
            ExteriorColor(v) => self.exterior_color = v,
            PaintFinish(v) => self.paint_finish = v,
            RoofType(v) => self.roof_type = v,
            Spoiler(v) => self.spoiler = v,
            Rims(v) => self.rims = v,
            RimSize(v) => self.rim_size = v,
            Tyres(v) => self.tyres = v,
            DoorHandles(v) => self.door_handles = v,
            ExhaustStyle(v) => self.exhaust_style = v,
            Upholstery(v) => self.upholstery = v,
            SeatType(v) => self.seat_type = v,
            AmbientLighting(v) => self.ambient_lighting = v,
            DashboardLayout(v) => self.dashboard_layout = v,
            CabinColorCombo(v) => self.cabin_color_combo = v,
            Steering(v) => self.steering = v,
            Sunroof(v) => self.sunroof = v,
            Infotainment(v) => self.infotainment = v,
            WirelessCharging(v) => self.wireless_charging = v,
            AddConnectivity(v) => self.insert_into(SetField::Connectivity, v),
            RemoveConnectivity(v) => self.remove_from(SetField::Connectivity, &v),
            VoiceAssistant(v) => self.voice_assistant = v,
            AddSmartTech(v) => self.insert_into(SetField::SmartTech, v),
            RemoveSmartTech(v) => self.remove_from(SetField::SmartTech, &v),
            Airbags(v) => self.airbags = v,
            AntiTheft(v) => self.anti_theft = v,
            CrashSos(v) => self.crash_sos = v,
            Tpms(v) => self.tpms = v,
            Isofix(v) => self.isofix = v,
            TowHitch(v) => self.tow_hitch = v,
            RoofRack(v) => self.roof_rack = v,
            CustomLogo(v) => self.custom_logo = v,
            NumberPlate(v) => self.number_plate = v,
            SpecialRequests(v) => self.special_requests = v,
        }
    }
}

/// The two set-valued fields of a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum SetField {
    Connectivity,
    SmartTech,
}

/// One field-level edit, as sent by a wizard step editor.
///
/// Serialized adjacently tagged: `{"field": "rimSize", "value": 19}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ConfigUpdate {
    BodyStyle(String),
    BaseVariant(String),
    Budget(u64),
    Transmission(String),
    EngineType(String),
    EngineSize(String),
    DriveType(String),
    Turbo(bool),
    MaxSpeed(u32),
    ZeroToHundred(String),
    EvBattery(String),
    FastCharging(bool),
    Range(u32),
    ExteriorColor(String),
    PaintFinish(String),
    RoofType(String),
    Spoiler(String),
    Rims(String),
    RimSize(u32),
    Tyres(String),
    DoorHandles(String),
    ExhaustStyle(String),
    Upholstery(String),
    SeatType(String),
    AmbientLighting(String),
    DashboardLayout(String),
    CabinColorCombo(String),
    Steering(String),
    Sunroof(String),
    Infotainment(String),
    WirelessCharging(bool),
    AddConnectivity(String),
    RemoveConnectivity(String),
    VoiceAssistant(bool),
    AddSmartTech(String),
    RemoveSmartTech(String),
    Airbags(u32),
    AntiTheft(String),
    #[serde(rename = "crashSOS")]
    CrashSos(bool),
    Tpms(bool),
    Isofix(bool),
    TowHitch(bool),
    RoofRack(bool),
    CustomLogo(Option<LogoUpload>),
    NumberPlate(String),
    SpecialRequests(String),
}

impl ConfigUpdate {
    /// The wizard step whose editor owns the updated field.
    pub fn step(&self) -> WizardStep {
        use ConfigUpdate::*;
        match self {
            BodyStyle(_) | BaseVariant(_) | Budget(_) | Transmission(_) => WizardStep::BodyModel,
            EngineType(_) | EngineSize(_) | DriveType(_) | Turbo(_) | MaxSpeed(_)
            | ZeroToHundred(_) | EvBattery(_) | FastCharging(_) | Range(_) => {
                WizardStep::EnginePerformance
            }
            ExteriorColor(_) | PaintFinish(_) | RoofType(_) | Spoiler(_) | Rims(_)
            | RimSize(_) | Tyres(_) | DoorHandles(_) | ExhaustStyle(_) => WizardStep::Exterior,
            Upholstery(_) | SeatType(_) | AmbientLighting(_) | DashboardLayout(_)
            | CabinColorCombo(_) | Steering(_) | Sunroof(_) => WizardStep::Interior,
            Infotainment(_) | WirelessCharging(_) | AddConnectivity(_)
            | RemoveConnectivity(_) | VoiceAssistant(_) | AddSmartTech(_)
            | RemoveSmartTech(_) => WizardStep::Technology,
            Airbags(_) | AntiTheft(_) | CrashSos(_) | Tpms(_) | Isofix(_) => WizardStep::Safety,
            TowHitch(_) | RoofRack(_) | CustomLogo(_) | NumberPlate(_) | SpecialRequests(_) => {
                WizardStep::AddOns
            }
        }
    }
}

/// The eight steps of the configurator wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    BodyModel,
    EnginePerformance,
    Exterior,
    Interior,
    Technology,
    Safety,
    AddOns,
    Summary,
}

impl WizardStep {
    pub const ALL: [WizardStep; 8] = [
        WizardStep::BodyModel,
        WizardStep::EnginePerformance,
        WizardStep::Exterior,
        WizardStep::Interior,
        WizardStep::Technology,
        WizardStep::Safety,
        WizardStep::AddOns,
        WizardStep::Summary,
    ];

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::BodyModel => "Select Body & Model",
            WizardStep::EnginePerformance => "Engine & Performance",
            WizardStep::Exterior => "Exterior",
            WizardStep::Interior => "Interior",
            WizardStep::Technology => "Technology & Smart Features",
            WizardStep::Safety => "Safety",
            WizardStep::AddOns => "Accessories & Add-Ons",
            WizardStep::Summary => "Summary",
        }
    }

    /// 1-based position in the wizard.
    pub fn number(self) -> usize {
        self as usize + 1
    }
}
