use shared::BuildingType;

/// Convert a packed 0xRRGGBB color to linear-ish float RGB
pub fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Parse a "#RRGGBB" string, falling back to mid-gray on bad input
pub fn rgb_str(s: &str) -> [f32; 3] {
    u32::from_str_radix(s.trim_start_matches('#'), 16)
        .map(rgb)
        .unwrap_or([0.5, 0.5, 0.5])
}

/// Material colors for one building type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub column: [f32; 3],
    pub slab: [f32; 3],
    pub glass: [f32; 3],
    pub mullion: [f32; 3],
    pub roof: [f32; 3],
}

pub const FOUNDATION_COLOR: [f32; 3] = [0.29, 0.29, 0.29];
pub const TRUSS_COLOR: [f32; 3] = [0.227, 0.227, 0.227];
pub const HELIPAD_COLOR: [f32; 3] = [1.0, 0.267, 0.267];
pub const MARKING_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const DOCK_COLOR: [f32; 3] = [0.333, 0.333, 0.333];

/// Per-type construction style: column grid, facade treatment, roof extras
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeStyle {
    pub grid: u32,
    pub column_size: f32,
    pub palette: Palette,
    pub has_parapet: bool,
    pub large_windows: bool,
}

impl TypeStyle {
    pub fn for_type(building_type: BuildingType) -> Self {
        match building_type {
            // Dense column grid for heavy floor loads, roof helipad
            BuildingType::Institutional => Self {
                grid: 5,
                column_size: 0.7,
                palette: Palette {
                    column: rgb(0x707070),
                    slab: rgb(0xa0a0a0),
                    glass: rgb(0x90e0ff),
                    mullion: rgb(0x3a3a3a),
                    roof: rgb(0x606060),
                },
                has_parapet: true,
                large_windows: true,
            },
            BuildingType::Commercial => Self {
                grid: 3,
                column_size: 0.6,
                palette: Palette {
                    column: rgb(0x505050),
                    slab: rgb(0x888888),
                    glass: rgb(0x88bbff),
                    mullion: rgb(0x1a1a1a),
                    roof: rgb(0x4a4a4a),
                },
                has_parapet: true,
                large_windows: true,
            },
            // Oversized columns, mostly solid facade, sloped roof + dock
            BuildingType::Industrial => Self {
                grid: 3,
                column_size: 1.0,
                palette: Palette {
                    column: rgb(0x4a4a4a),
                    slab: rgb(0x707070),
                    glass: rgb(0x666666),
                    mullion: rgb(0x333333),
                    roof: rgb(0x3a3a3a),
                },
                has_parapet: false,
                large_windows: false,
            },
            BuildingType::Residential => Self {
                grid: 4,
                column_size: 0.5,
                palette: Palette {
                    column: rgb(0x606060),
                    slab: rgb(0x999999),
                    glass: rgb(0x88bbff),
                    mullion: rgb(0x2a2a2a),
                    roof: rgb(0x555555),
                },
                has_parapet: true,
                large_windows: false,
            },
        }
    }

    pub fn glass_opacity(&self, building_type: BuildingType) -> f32 {
        if building_type == BuildingType::Industrial {
            0.15
        } else if self.large_windows {
            0.35
        } else {
            0.3
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_unpacks_channels() {
        let c = rgb(0xff8000);
        assert!((c[0] - 1.0).abs() < 1e-6);
        assert!((c[1] - 128.0 / 255.0).abs() < 1e-6);
        assert!((c[2]).abs() < 1e-6);
    }

    #[test]
    fn test_rgb_str_parses_registry_colors() {
        let c = rgb_str("#4CAF50");
        assert!((c[0] - 0x4c as f32 / 255.0).abs() < 1e-6);
        assert_eq!(rgb_str("not-a-color"), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_type_styles() {
        let inst = TypeStyle::for_type(BuildingType::Institutional);
        assert_eq!(inst.grid, 5);
        assert!(inst.has_parapet);

        let ind = TypeStyle::for_type(BuildingType::Industrial);
        assert!(!ind.has_parapet);
        assert!((ind.column_size - 1.0).abs() < 1e-6);
        assert!((ind.glass_opacity(BuildingType::Industrial) - 0.15).abs() < 1e-6);

        let res = TypeStyle::for_type(BuildingType::Residential);
        assert!((res.glass_opacity(BuildingType::Residential) - 0.3).abs() < 1e-6);
        let com = TypeStyle::for_type(BuildingType::Commercial);
        assert!((com.glass_opacity(BuildingType::Commercial) - 0.35).abs() < 1e-6);
    }
}
