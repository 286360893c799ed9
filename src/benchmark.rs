//! A small timing harness for benchmarking a function over a range of
//! input sizes.
//!
//! Measuring a fast function on a small input needs many iterations to
//! rise above timer noise, while a slow function on a large input needs
//! only a few, so every input size carries its own iteration count in a
//! [`RunSpec`]. The harness averages wall-clock time across the
//! iterations of each spec and reports mean microseconds per call.

use std::collections::BTreeMap;
use std::time::Instant;

/// One benchmark descriptor: how many timed iterations to run at a given
/// input size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSpec {
    /// Input size handed to the input generator.
    pub input_size: u64,
    /// Number of calls to average over at this size.
    pub iterations: u64,
}

/// The measured outcome for one [`RunSpec`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunRecord {
    /// Input size this record was measured at.
    pub input_size: u64,
    /// Number of calls the mean was taken over.
    pub iterations: u64,
    /// Mean wall-clock microseconds per call.
    pub mean_micros: f64,
}

/// Benchmark runner pairing an input generator with the function under
/// test.
///
/// # Examples
///
/// ```
/// use linsys::benchmark::{Benchmark, RunSpec};
///
/// let mut bench = Benchmark::new(
///     |size| (0..size).map(|i| i as f64).collect::<Vec<f64>>(),
///     |input: &Vec<f64>| input.iter().sum::<f64>(),
/// );
/// let records = bench.run([
///     RunSpec { input_size: 100, iterations: 10 },
///     RunSpec { input_size: 200, iterations: 10 },
/// ]);
///
/// assert_eq!(records.len(), 2);
/// assert!(records[&100].mean_micros >= 0.0);
/// ```
pub struct Benchmark<G, F> {
    input_gen: G,
    dut: F,
}

impl<In, Out, G, F> Benchmark<G, F>
where
    G: FnMut(u64) -> In,
    F: FnMut(&In) -> Out,
{
    /// Pair an input generator with the function under test.
    pub fn new(input_gen: G, dut: F) -> Self {
        Self { input_gen, dut }
    }

    /// Run every spec and collect the timings, keyed by input size.
    ///
    /// Two inputs are generated per spec and alternated across the timed
    /// loop so a warm cache line from the previous call does not flatter
    /// the measurement.
    pub fn run(&mut self, specs: impl IntoIterator<Item = RunSpec>) -> BTreeMap<u64, RunRecord> {
        let mut records = BTreeMap::new();
        for spec in specs {
            let input1 = (self.input_gen)(spec.input_size);
            let input2 = (self.input_gen)(spec.input_size);

            let start = Instant::now();
            for i in 0..spec.iterations {
                if i % 2 == 0 {
                    (self.dut)(&input1);
                } else {
                    (self.dut)(&input2);
                }
            }
            let elapsed = start.elapsed();

            records.insert(
                spec.input_size,
                RunRecord {
                    input_size: spec.input_size,
                    iterations: spec.iterations,
                    mean_micros: elapsed.as_secs_f64() * 1e6 / spec.iterations as f64,
                },
            );
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max(values: &Vec<f64>) -> f64 {
        values.iter().copied().fold(f64::MIN, f64::max)
    }

    #[test]
    fn records_one_entry_per_spec() {
        let specs = [
            RunSpec { input_size: 100, iterations: 50 },
            RunSpec { input_size: 200, iterations: 50 },
            RunSpec { input_size: 300, iterations: 50 },
            RunSpec { input_size: 400, iterations: 100 },
        ];

        let mut bench = Benchmark::new(
            |size| (0..size).map(|i| (i % 97) as f64).collect::<Vec<f64>>(),
            max,
        );
        let records = bench.run(specs);

        assert_eq!(records.len(), specs.len());
        for spec in &specs {
            let record = &records[&spec.input_size];
            assert_eq!(record.input_size, spec.input_size);
            assert_eq!(record.iterations, spec.iterations);
            assert!(record.mean_micros >= 0.0);
        }
    }

    #[test]
    fn records_are_sorted_by_input_size() {
        let mut bench = Benchmark::new(|size| size, |&input: &u64| input * 2);
        let records = bench.run([
            RunSpec { input_size: 300, iterations: 5 },
            RunSpec { input_size: 100, iterations: 5 },
            RunSpec { input_size: 200, iterations: 5 },
        ]);

        let sizes: Vec<u64> = records.keys().copied().collect();
        assert_eq!(sizes, vec![100, 200, 300]);
    }

    #[test]
    fn rerunning_a_size_overwrites_the_record() {
        let mut bench = Benchmark::new(|size| size, |&input: &u64| input + 1);
        let records = bench.run([
            RunSpec { input_size: 100, iterations: 5 },
            RunSpec { input_size: 100, iterations: 9 },
        ]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[&100].iterations, 9);
    }
}
