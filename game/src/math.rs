pub use random::*;

mod random;

pub type Position = [f32; 2];

/// Unix time in seconds.
pub type Timestamp = u64;

pub fn unix_time() -> Timestamp {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or(0)
}

pub trait RectMath {
    fn contains(&self, point: Position) -> bool;
}

/// `[x, y, width, height]`
impl RectMath for [f32; 4] {
    fn contains(&self, point: Position) -> bool {
        let [x, y, width, height] = *self;
        point[0] >= x && point[0] < x + width && point[1] >= y && point[1] < y + height
    }
}
