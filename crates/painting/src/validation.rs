use crate::constants::MAX_CANVAS_SIZE;
use crate::types::Rgba;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid canvas size: {width}x{height} (each side must be 1..={})", MAX_CANVAS_SIZE)]
    InvalidSize { width: u32, height: u32 },
    #[error("Invalid {name} color: {color:?} (channels must be finite and in 0..=1)")]
    InvalidColor { name: &'static str, color: Rgba },
    #[error("Invalid sketch radius: {0}")]
    InvalidSketchRadius(u32),
}

/// Check canvas dimensions against the supported range
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), ValidationError> {
    let valid = |side: u32| (1..=MAX_CANVAS_SIZE).contains(&side);
    if valid(width) && valid(height) {
        Ok(())
    } else {
        Err(ValidationError::InvalidSize { width, height })
    }
}

/// Check that every channel is a finite value in [0, 1]
pub fn validate_color(name: &'static str, color: Rgba) -> Result<(), ValidationError> {
    if color.iter().all(|c| c.is_finite() && (0.0..=1.0).contains(c)) {
        Ok(())
    } else {
        Err(ValidationError::InvalidColor { name, color })
    }
}

/// Check the sketch linker radius (zero would disable linking entirely)
pub fn validate_sketch_radius(radius: u32) -> Result<(), ValidationError> {
    if radius == 0 || radius > MAX_CANVAS_SIZE {
        return Err(ValidationError::InvalidSketchRadius(radius));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        assert!(validate_dimensions(1, 1).is_ok());
        assert!(validate_dimensions(1920, 1080).is_ok());
        assert_eq!(
            validate_dimensions(0, 10),
            Err(ValidationError::InvalidSize { width: 0, height: 10 })
        );
        assert!(validate_dimensions(10, MAX_CANVAS_SIZE + 1).is_err());
    }

    #[test]
    fn test_color() {
        assert!(validate_color("draw", [0.0, 0.5, 1.0, 1.0]).is_ok());
        assert!(validate_color("draw", [1.5, 0.0, 0.0, 1.0]).is_err());
        assert!(validate_color("draw", [f32::NAN, 0.0, 0.0, 1.0]).is_err());
        assert!(validate_color("draw", [0.0, 0.0, 0.0, -0.1]).is_err());
    }

    #[test]
    fn test_sketch_radius() {
        assert!(validate_sketch_radius(10).is_ok());
        assert_eq!(validate_sketch_radius(0), Err(ValidationError::InvalidSketchRadius(0)));
    }
}
