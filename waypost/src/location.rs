/// The most recent cached position, not a fresh fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LastKnownFix {
    pub latitude: f64,
    pub longitude: f64,
}

/// Seam for the platform location service: a synchronous getter that
/// may have nothing cached yet.
pub trait LocationProvider {
    fn last_known(&self) -> Option<LastKnownFix>;
}

/// Reads a fix from an environment variable holding "lat,long",
/// standing in for a platform location service.
pub struct EnvLocation {
    var: String,
}

impl EnvLocation {
    pub fn new() -> Self {
        Self::with_var("WAYPOST_FIX")
    }

    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvLocation {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationProvider for EnvLocation {
    fn last_known(&self) -> Option<LastKnownFix> {
        let raw = std::env::var(&self.var).ok()?;
        let fix = parse_fix(&raw);
        if fix.is_none() {
            tracing::warn!(var = %self.var, raw = %raw, "ignoring unparsable fix");
        }
        fix
    }
}

fn parse_fix(raw: &str) -> Option<LastKnownFix> {
    let (lat, long) = raw.split_once(',')?;
    let latitude = lat.trim().parse::<f64>().ok()?;
    let longitude = long.trim().parse::<f64>().ok()?;
    if !latitude.is_finite() || !longitude.is_finite() {
        return None;
    }
    Some(LastKnownFix {
        latitude,
        longitude,
    })
}
