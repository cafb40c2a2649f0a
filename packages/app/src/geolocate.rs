//! Start-position resolution.
//!
//! Geolocation is best-effort: any failure falls back to the fixed city
//! center so the map always has somewhere to open.

use async_trait::async_trait;

/// Fallback map center when the user's position cannot be resolved
/// (Seoul City Hall).
pub const DEFAULT_CENTER: (f64, f64) = (37.5665, 126.978);

/// A source of the user's current position.
#[async_trait]
pub trait Locator {
    /// Resolves the user's `(lat, lng)`, or an error message when the
    /// platform denied or failed the lookup.
    async fn locate(&self) -> Result<(f64, f64), String>;
}

/// Resolves the initial map center from `locator`, falling back to
/// [`DEFAULT_CENTER`] on failure. The error is logged and swallowed.
pub async fn resolve_start_position(locator: &dyn Locator) -> (f64, f64) {
    match locator.locate().await {
        Ok(position) => position,
        Err(reason) => {
            log::warn!("Geolocation unavailable ({reason}); using default center");
            DEFAULT_CENTER
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Result<(f64, f64), String>);

    #[async_trait]
    impl Locator for Fixed {
        async fn locate(&self) -> Result<(f64, f64), String> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn uses_located_position() {
        let locator = Fixed(Ok((37.49, 127.03)));
        assert_eq!(resolve_start_position(&locator).await, (37.49, 127.03));
    }

    #[tokio::test]
    async fn falls_back_to_default_center() {
        let locator = Fixed(Err("permission denied".to_owned()));
        assert_eq!(resolve_start_position(&locator).await, DEFAULT_CENTER);
    }
}
