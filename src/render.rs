use crate::record::ReputationRecord;

/// The resolved, display-ready outcome of one resolution. The host passes
/// this to its widget builder; nothing here touches the DOM or the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderDecision {
    /// Plain account-age annotation.
    Aged { age_days: u32, verified: bool },
    /// Age annotation plus a bot-cadence warning.
    LikelyBot { age_days: u32 },
    /// Resolution failed; show the reason instead of an age.
    Error { reason: String },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Presentation attributes the host applies to the annotation element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStyle {
    pub color: Rgb,
    pub font_size_px: u32,
}

/// Errors render in orange at the calm size, whatever the account looked like.
const ERROR_COLOR: Rgb = Rgb(255, 165, 0);

const VERIFIED_COLOR: Rgb = Rgb(0, 255, 0);

impl Rgb {
    /// CSS hex form, `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Red at 0 days shading linearly to pure green at 1000 days and beyond.
/// A verified account is always shown bright green regardless of age.
pub fn color_for(age_days: u32, verified: bool) -> Rgb {
    if verified {
        return VERIFIED_COLOR;
    }
    if age_days >= 1000 {
        return Rgb(0, 255, 0);
    }
    let green = (f64::from(age_days) / 1000.0 * 255.0).round() as u8;
    Rgb(255 - green, green, 0)
}

/// Accounts under 100 days get the loud size; verification calms it down.
pub fn font_size_for(age_days: u32, verified: bool) -> u32 {
    if age_days < 100 && !verified {
        20
    } else {
        14
    }
}

impl RenderDecision {
    /// Decide from a stored record. Precedence: verified > bot-warning >
    /// plain aged. A verified record never surfaces the bot branch.
    pub fn from_record(record: &ReputationRecord) -> Self {
        if record.likely_bot && !record.verified {
            RenderDecision::LikelyBot {
                age_days: record.age_days,
            }
        } else {
            RenderDecision::Aged {
                age_days: record.age_days,
                verified: record.verified,
            }
        }
    }

    pub fn error(reason: impl Into<String>) -> Self {
        RenderDecision::Error {
            reason: reason.into(),
        }
    }

    /// Annotation text for the host widget.
    pub fn label(&self) -> String {
        match self {
            RenderDecision::Aged { age_days, .. } => format!("{} days old", age_days),
            RenderDecision::LikelyBot { age_days } => {
                format!("{} days old (likely bot)", age_days)
            }
            RenderDecision::Error { reason } => reason.clone(),
        }
    }

    pub fn style(&self) -> RenderStyle {
        match *self {
            RenderDecision::Aged { age_days, verified } => RenderStyle {
                color: color_for(age_days, verified),
                font_size_px: font_size_for(age_days, verified),
            },
            RenderDecision::LikelyBot { age_days } => RenderStyle {
                color: color_for(age_days, false),
                font_size_px: font_size_for(age_days, false),
            },
            RenderDecision::Error { .. } => RenderStyle {
                color: ERROR_COLOR,
                font_size_px: 14,
            },
        }
    }
}
