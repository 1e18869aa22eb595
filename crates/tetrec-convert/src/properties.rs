//! Static properties published next to the loaders.

use tetrec_core::GridProperties;

use crate::value::DynamicValue;

/// `{height, width}` of the play field every recording is relative to.
pub fn grid_properties() -> DynamicValue {
    let grid = GridProperties::STANDARD;
    DynamicValue::of_map([
        ("height", DynamicValue::of_int(grid.height)),
        ("width", DynamicValue::of_int(grid.width)),
    ])
}

/// `{grid_properties: {height, width}}`.
pub fn properties() -> DynamicValue {
    DynamicValue::of_map([("grid_properties", grid_properties())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_ten_by_twenty() {
        let props = properties();
        let grid = props.get("grid_properties").unwrap();
        assert_eq!(grid.get("width"), Some(&DynamicValue::of_int(10u32)));
        assert_eq!(grid.get("height"), Some(&DynamicValue::of_int(20u32)));
    }
}
