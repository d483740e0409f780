use std::time::{ Duration, Instant };

/// Measures the stages of a run: `lap` gives the time since the previous lap.
pub struct Timer{
    start: Instant,
    lap: Instant,
}

impl Timer{
    pub fn new() -> Self{
        let start = Instant::now();
        Self{ start, lap: start }
    }

    pub fn lap(&mut self) -> Duration{
        let now = Instant::now();
        let lap = now - self.lap;
        self.lap = now;
        lap
    }

    pub fn total(&self) -> Duration{
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests{

    use super::*;

    #[test]
    fn test_laps_add_up(){
        let mut timer = Timer::new();
        let a = timer.lap();
        std::thread::sleep(Duration::from_millis(2));
        let b = timer.lap();
        assert!(b >= Duration::from_millis(2));
        assert!(a + b <= timer.total());
    }
}
