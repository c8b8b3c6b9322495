//! Map-wide raster layers.

use s2bridge_mapping::{MappingError, probe_required, validate};
use s2bridge_wire as wire;

use crate::geometry::positive_int32;
use crate::{Catalog, Size2dI, WireCodec};

/// A packed raster image. The pixel buffer is opaque to this crate; only
/// its length is checked against the declared size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageData {
    bits_per_pixel: i32,
    size: Size2dI,
    data: Vec<u8>,
}

impl ImageData {
    /// # Errors
    /// [`MappingError::InvalidRange`] if `bits_per_pixel` is zero or above
    /// `i32::MAX`, or if `data` does not hold exactly `width * height`
    /// pixels. A declared size too large to count in bits never matches.
    pub fn new(bits_per_pixel: u32, size: Size2dI, data: Vec<u8>) -> Result<Self, MappingError> {
        let bits_per_pixel = positive_int32("bits per pixel", bits_per_pixel)?;
        let expected = size
            .area()
            .checked_mul(u64::from(bits_per_pixel.unsigned_abs()))
            .map(|bits| bits.div_ceil(8));
        let matches = expected.is_some_and(|n| u64::try_from(data.len()).is_ok_and(|len| len == n));
        if !matches {
            return Err(MappingError::InvalidRange {
                name: "image data",
                value: i64::try_from(data.len()).unwrap_or(i64::MAX),
            });
        }
        Ok(Self {
            bits_per_pixel,
            size,
            data,
        })
    }

    pub fn bits_per_pixel(&self) -> u32 {
        self.bits_per_pixel.unsigned_abs()
    }

    pub fn size(&self) -> Size2dI {
        self.size
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl WireCodec for ImageData {
    type Wire = wire::ImageData;
    const ENTITY: &'static str = "image data";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, catalog: &C) -> Result<Self, MappingError> {
        type W = wire::ImageData;

        let bpp = probe_required(msg, "bits per pixel", W::has_bits_per_pixel, W::bits_per_pixel)?;
        let size = probe_required(msg, "size", W::has_size, W::size)?;
        let data = probe_required(msg, "data", W::has_data, W::data)?;
        Self::new(
            validate::require_positive("bits per pixel", bpp)?.unsigned_abs(),
            Size2dI::decode(size, catalog)?,
            data.to_vec(),
        )
    }

    fn encode(&self) -> Self::Wire {
        wire::ImageData {
            bits_per_pixel: Some(self.bits_per_pixel),
            size: Some(self.size.encode()),
            data: Some(self.data.clone()),
        }
    }
}

/// Visibility and creep layers for the whole map. Both are always present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapState {
    visibility: ImageData,
    creep: ImageData,
}

impl MapState {
    pub fn new(visibility: ImageData, creep: ImageData) -> Self {
        Self { visibility, creep }
    }

    pub fn visibility(&self) -> &ImageData {
        &self.visibility
    }

    pub fn creep(&self) -> &ImageData {
        &self.creep
    }
}

impl WireCodec for MapState {
    type Wire = wire::MapState;
    const ENTITY: &'static str = "map state";

    fn decode<C: Catalog + ?Sized>(msg: &Self::Wire, catalog: &C) -> Result<Self, MappingError> {
        type W = wire::MapState;

        let creep = probe_required(msg, "creep", W::has_creep, W::creep)?;
        let visibility = probe_required(msg, "visibility", W::has_visibility, W::visibility)?;
        Ok(Self {
            visibility: ImageData::decode(visibility, catalog)?,
            creep: ImageData::decode(creep, catalog)?,
        })
    }

    fn encode(&self) -> Self::Wire {
        wire::MapState {
            visibility: Some(self.visibility.encode()),
            creep: Some(self.creep.encode()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticCatalog;

    fn wire_layer(width: i32, height: i32, data: Vec<u8>) -> wire::ImageData {
        wire::ImageData {
            bits_per_pixel: Some(1),
            size: Some(wire::Size2DI {
                x: Some(width),
                y: Some(height),
            }),
            data: Some(data),
        }
    }

    #[test]
    fn test_bit_packed_length_rounds_up() {
        let size = Size2dI::new(3, 3).unwrap();
        assert!(ImageData::new(1, size, vec![0; 2]).is_ok());
        let err = ImageData::new(1, size, vec![0; 1]).unwrap_err();
        assert_eq!(
            err,
            MappingError::InvalidRange {
                name: "image data",
                value: 1
            }
        );
    }

    #[test]
    fn test_byte_per_pixel_layer() {
        let size = Size2dI::new(4, 2).unwrap();
        let image = ImageData::new(8, size, vec![7; 8]).unwrap();
        assert_eq!(image.data().len(), 8);
        assert_eq!(image.size().area(), 8);
    }

    #[test]
    fn test_zero_bits_per_pixel_rejected() {
        let size = Size2dI::new(1, 1).unwrap();
        let err = ImageData::new(0, size, Vec::new()).unwrap_err();
        assert_eq!(
            err,
            MappingError::InvalidRange {
                name: "bits per pixel",
                value: 0
            }
        );
    }

    #[test]
    fn test_bits_per_pixel_above_int32_rejected() {
        let size = Size2dI::new(1, 1).unwrap();
        let err = ImageData::new(u32::MAX, size, vec![0]).unwrap_err();
        assert_eq!(
            err,
            MappingError::InvalidRange {
                name: "bits per pixel",
                value: i64::from(u32::MAX)
            }
        );
    }

    #[test]
    fn test_uncountable_raster_is_invalid_not_a_panic() {
        let widest = i32::MAX.unsigned_abs();
        let size = Size2dI::new(widest, widest).unwrap();
        let err = ImageData::new(widest, size, vec![0; 4]).unwrap_err();
        assert_eq!(
            err,
            MappingError::InvalidRange {
                name: "image data",
                value: 4
            }
        );

        let huge = wire::ImageData {
            bits_per_pixel: Some(i32::MAX),
            size: Some(wire::Size2DI {
                x: Some(i32::MAX),
                y: Some(i32::MAX),
            }),
            data: Some(vec![0xff]),
        };
        let msg = wire::MapState {
            visibility: Some(huge),
            creep: Some(wire_layer(8, 1, vec![0x00])),
        };
        let err = MapState::decode(&msg, &StaticCatalog::default()).unwrap_err();
        assert_eq!(
            err,
            MappingError::InvalidRange {
                name: "image data",
                value: 1
            }
        );
    }

    #[test]
    fn test_missing_creep_is_reported_with_or_without_visibility() {
        let catalog = StaticCatalog::default();
        let without_either = wire::MapState {
            visibility: None,
            creep: None,
        };
        assert_eq!(
            MapState::decode(&without_either, &catalog).unwrap_err(),
            MappingError::MissingRequiredField { name: "creep" }
        );

        let visibility_only = wire::MapState {
            visibility: Some(wire_layer(8, 1, vec![0xff])),
            creep: None,
        };
        assert_eq!(
            MapState::decode(&visibility_only, &catalog).unwrap_err(),
            MappingError::MissingRequiredField { name: "creep" }
        );
    }

    #[test]
    fn test_decode_negative_dimension() {
        let msg = wire::MapState {
            visibility: Some(wire_layer(-8, 1, vec![0xff])),
            creep: Some(wire_layer(8, 1, vec![0x00])),
        };
        let err = MapState::decode(&msg, &StaticCatalog::default()).unwrap_err();
        assert_eq!(
            err,
            MappingError::InvalidRange {
                name: "size x",
                value: -8
            }
        );
    }

    #[test]
    fn test_layers_round_trip() {
        let msg = wire::MapState {
            visibility: Some(wire_layer(8, 2, vec![0xff, 0x0f])),
            creep: Some(wire_layer(8, 2, vec![0x00, 0x01])),
        };
        let state = MapState::decode(&msg, &StaticCatalog::default()).unwrap();
        assert_eq!(state.creep().data(), &[0x00, 0x01]);
        assert_eq!(state.encode(), msg);
    }
}
