/// Frame buffer layout shared with the host renderer.
/// Must stay in sync with the host page's `main.js`.
///
/// Layout (all values f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [SDF spheres: max_sdf_instances × 16 floats]
/// [Points: max_points × 8 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// The header is rewritten every frame; the host reads capacities and
/// counts from it to slice the sections.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_SDF_INSTANCES: usize = 2;
pub const HEADER_SDF_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_POINTS: usize = 4;
pub const HEADER_POINT_COUNT: usize = 5;
pub const HEADER_MAX_EVENTS: usize = 6;
pub const HEADER_EVENT_COUNT: usize = 7;
pub const HEADER_VIEWPORT_WIDTH: usize = 8;
pub const HEADER_VIEWPORT_HEIGHT: usize = 9;
pub const HEADER_AMBIENT_R: usize = 10;
pub const HEADER_AMBIENT_G: usize = 11;
pub const HEADER_AMBIENT_B: usize = 12;

pub const PROTOCOL_VERSION: f32 = 2.0;

/// Floats per SDF instance (wire format).
pub const SDF_INSTANCE_FLOATS: usize = 16;

/// Floats per point instance: x, y, size, depth, r, g, b, a.
pub const POINT_FLOATS: usize = 8;

/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_sdf_instances: usize,
    pub max_points: usize,
    pub max_events: usize,

    pub sdf_data_floats: usize,
    pub point_data_floats: usize,
    pub event_data_floats: usize,

    /// Offset (in floats) where SDF data begins.
    pub sdf_data_offset: usize,
    /// Offset (in floats) where point data begins.
    pub point_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_sdf_instances: usize, max_points: usize, max_events: usize) -> Self {
        let sdf_data_floats = max_sdf_instances * SDF_INSTANCE_FLOATS;
        let point_data_floats = max_points * POINT_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let sdf_data_offset = HEADER_FLOATS;
        let point_data_offset = sdf_data_offset + sdf_data_floats;
        let event_data_offset = point_data_offset + point_data_floats;
        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_sdf_instances,
            max_points,
            max_events,
            sdf_data_floats,
            point_data_floats,
            event_data_floats,
            sdf_data_offset,
            point_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_sdf_instances, config.max_points, config.max_events)
    }
}

/// Per-frame values written into the header.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameCounts {
    pub frame: u64,
    pub sdf_instances: usize,
    pub points: usize,
    pub events: usize,
    pub viewport: [f32; 2],
    pub ambient: [f32; 3],
}

/// Fill a header block for the current frame.
pub fn write_header(header: &mut [f32; HEADER_FLOATS], layout: &ProtocolLayout, counts: &FrameCounts) {
    header.fill(0.0);
    header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
    // f32 holds integers exactly up to 2^24 frames (~3 days at 60 Hz); wrap instead of losing precision.
    header[HEADER_FRAME_COUNTER] = (counts.frame % (1 << 24)) as f32;
    header[HEADER_MAX_SDF_INSTANCES] = layout.max_sdf_instances as f32;
    header[HEADER_SDF_INSTANCE_COUNT] = counts.sdf_instances.min(layout.max_sdf_instances) as f32;
    header[HEADER_MAX_POINTS] = layout.max_points as f32;
    header[HEADER_POINT_COUNT] = counts.points.min(layout.max_points) as f32;
    header[HEADER_MAX_EVENTS] = layout.max_events as f32;
    header[HEADER_EVENT_COUNT] = counts.events.min(layout.max_events) as f32;
    header[HEADER_VIEWPORT_WIDTH] = counts.viewport[0];
    header[HEADER_VIEWPORT_HEIGHT] = counts.viewport[1];
    header[HEADER_AMBIENT_R] = counts.ambient[0];
    header[HEADER_AMBIENT_G] = counts.ambient[1];
    header[HEADER_AMBIENT_B] = counts.ambient[2];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_layout() {
        let config = GameConfig::default();
        let layout = ProtocolLayout::from_config(&config);
        assert_eq!(layout.sdf_data_offset, HEADER_FLOATS);
        assert_eq!(layout.sdf_data_floats, config.max_sdf_instances * 16);
        assert_eq!(layout.point_data_floats, config.max_points * 8);
        assert_eq!(layout.event_data_floats, config.max_events * 4);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(32, 5000, 16);
        assert_eq!(layout.point_data_offset, layout.sdf_data_offset + layout.sdf_data_floats);
        assert_eq!(layout.event_data_offset, layout.point_data_offset + layout.point_data_floats);
        assert_eq!(layout.buffer_total_floats, HEADER_FLOATS + 32 * 16 + 5000 * 8 + 16 * 4);
    }

    #[test]
    fn header_clamps_counts_to_capacity() {
        let layout = ProtocolLayout::new(4, 10, 2);
        let mut header = [9.0; HEADER_FLOATS];
        write_header(&mut header, &layout, &FrameCounts {
            frame: 7,
            sdf_instances: 9,
            points: 3,
            events: 5,
            viewport: [800.0, 600.0],
            ambient: [0.2, 0.2, 0.2],
        });
        assert_eq!(header[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(header[HEADER_FRAME_COUNTER], 7.0);
        assert_eq!(header[HEADER_SDF_INSTANCE_COUNT], 4.0);
        assert_eq!(header[HEADER_POINT_COUNT], 3.0);
        assert_eq!(header[HEADER_EVENT_COUNT], 2.0);
        assert_eq!(header[HEADER_VIEWPORT_HEIGHT], 600.0);
        assert_eq!(header[15], 0.0);
    }
}
