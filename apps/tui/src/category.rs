use crate::domain::Category;
use crate::map::Layer;

/// Range enforced by the radius slider widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Position of `value` in the range, 0.0 to 1.0.
    pub fn fraction(&self, value: f64) -> f64 {
        ((self.clamp(value) - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

pub const RADIUS_SLIDER: SliderRange = SliderRange {
    min: 100.0,
    max: 3000.0,
    step: 50.0,
};

/// Per-category visibility, radius, colour and the layer holding its drawables.
#[derive(Debug, Clone)]
pub struct CategoryConfig {
    pub visible: bool,
    pub radius_m: f64,
    pub color: String,
    pub layer: Layer,
}

impl CategoryConfig {
    pub fn for_category(category: Category) -> Self {
        Self {
            visible: true,
            radius_m: category.default_radius(),
            color: category.default_color().to_string(),
            layer: Layer::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CategoryStates {
    configs: [CategoryConfig; 6],
}

impl CategoryStates {
    pub fn new() -> Self {
        Self {
            configs: Category::ALL.map(CategoryConfig::for_category),
        }
    }

    pub const fn get(&self, category: Category) -> &CategoryConfig {
        &self.configs[category.index()]
    }

    pub fn get_mut(&mut self, category: Category) -> &mut CategoryConfig {
        &mut self.configs[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryConfig)> {
        Category::ALL.into_iter().zip(self.configs.iter())
    }
}

impl Default for CategoryStates {
    fn default() -> Self {
        Self::new()
    }
}
