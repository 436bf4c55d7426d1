// 通用工具：时钟与随机源，均可在测试中注入

mod clock;
mod random;

pub use clock::{Clock, ManualClock, SystemClock};
pub use random::RandomSource;
