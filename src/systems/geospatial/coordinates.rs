use cgmath::Point3;
use tracing::warn;

/// A latitude/longitude pair in degrees.
///
/// Nothing here is range checked. Values outside [-90, 90] / [-180, 180]
/// still project to a well defined point, it just won't line up with the
/// texture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f32,
    pub longitude: f32,
}

impl GeoCoordinate {
    pub fn new(latitude: f32, longitude: f32) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn project(&self, radius: f32) -> Point3<f32> {
        CoordinatesSystem::lat_lon_to_cartesian(self.latitude, self.longitude, radius)
    }

    /// Builds a coordinate from raw feed values. Anything missing, unparsable
    /// or non-finite falls back to 0 since the projector does no checking.
    pub fn from_feed(latitude: Option<&str>, longitude: Option<&str>) -> Self {
        Self {
            latitude: parse_feed_degrees("latitude", latitude),
            longitude: parse_feed_degrees("longitude", longitude),
        }
    }
}

fn parse_feed_degrees(field: &str, raw: Option<&str>) -> f32 {
    let Some(raw) = raw else {
        warn!(field, "coordinate missing from feed, defaulting to 0");
        return 0.0;
    };

    match raw.trim().parse::<f32>() {
        Ok(value) if value.is_finite() => value,
        Ok(value) => {
            warn!(field, %value, "non-finite coordinate in feed, defaulting to 0");
            0.0
        }
        Err(err) => {
            warn!(field, raw, %err, "unparsable coordinate in feed, defaulting to 0");
            0.0
        }
    }
}

pub struct CoordinatesSystem {}

impl CoordinatesSystem {
    // phi is measured down from +Y, theta is offset by 180 so the texture
    // seam sits on the antimeridian. flipping x puts the prime meridian of an
    // equirectangular texture where the sphere mesh expects it
    pub fn lat_lon_to_cartesian(lat: f32, lon: f32, radius: f32) -> Point3<f32> {
        let phi = (90.0 - lat).to_radians();
        let theta = (lon + 180.0).to_radians();

        let x = -(radius * phi.sin() * theta.cos());
        let z = radius * phi.sin() * theta.sin();
        let y = radius * phi.cos();

        Point3::new(x, y, z)
    }
}
