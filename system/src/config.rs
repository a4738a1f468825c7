use std::path::PathBuf;

/// Per-feed record counts and the input/output directory roots for one run.
///
/// `Default` mirrors the compiled-in constants `main.cpp` uses directly
/// (`numOftrades=18, numofprice=36, numofmarket=36, numofiq=36`) and the
/// relative `./Input`/`./Output` paths every connector in the original opens
/// against.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub trade_count: usize,
    pub price_count: usize,
    pub market_data_count: usize,
    pub inquiry_count: usize,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl RunConfig {
    pub fn input_path(&self, file_name: &str) -> PathBuf {
        self.input_dir.join(file_name)
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    pub fn historical_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join("Historical").join(file_name)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            trade_count: 18,
            price_count: 36,
            market_data_count: 36,
            inquiry_count: 36,
            input_dir: PathBuf::from("Input"),
            output_dir: PathBuf::from("Output"),
        }
    }
}
