// ============================================================================
// Engine Module
// Fixed-point scaling, rounding and compounding operators
// ============================================================================

pub mod compound;
pub mod conversion;
pub mod percentage;
pub(crate) mod rounding;
pub mod units;
pub mod wad_ray;

pub use compound::{binomial_compound, binomial_compound_with};
pub use conversion::{
    from_integer_amount, from_ray, to_human_string, to_integer_amount, to_plain_string, to_ray,
};
pub use percentage::{percent_div, percent_mul};
pub use units::{amount, one_ray, one_wad, percent, ray, wad};
pub use wad_ray::{ray_div, ray_mul, ray_to_wad, wad_div, wad_mul, wad_to_ray};
