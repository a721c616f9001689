//! Sample command implementation
//!
//! Draws from one of the distribution samplers and compares the observed
//! moments with the theoretical ones.

use std::fmt;

use clap::ValueEnum;
use maths_core::statistics::DataSet;
use maths_random::distributions::{
    BinomialGenerator, ContinuousUniformGenerator, DiscreteUniformGenerator,
    ExponentialGenerator, GaussianGenerator, NumberGenerator, PoissonGenerator,
};
use maths_random::{RepeatableRng, RngError};
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

use super::build_generator;

/// Distributions the sample command can draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Distribution {
    Binomial,
    Poisson,
    Exponential,
    Gaussian,
    /// Continuous uniform over `[min, max)`
    Uniform,
    /// Integer uniform over `[min, max]`
    DiscreteUniform,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Distribution parameters; unset values take the per-distribution defaults
#[derive(Debug, Clone, Default)]
pub struct SampleParameters {
    /// Binomial trial count
    pub n: Option<i32>,
    /// Binomial success probability
    pub p: Option<f64>,
    /// Poisson or Gaussian mean
    pub mean: Option<f64>,
    /// Exponential rate
    pub rate: Option<f64>,
    /// Gaussian standard deviation
    pub standard_deviation: Option<f64>,
    /// Uniform lower bound
    pub minimum: Option<f64>,
    /// Uniform upper bound
    pub maximum: Option<f64>,
}

/// Observed against expected moments for one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleReport {
    pub distribution: Distribution,
    pub samples: usize,
    pub expected_mean: f64,
    pub observed_mean: f64,
    pub expected_standard_deviation: f64,
    pub observed_standard_deviation: f64,
    pub observed_median: f64,
    pub observed_minimum: f64,
    pub observed_maximum: f64,
}

impl fmt::Display for SampleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?} distribution, {} samples", self.distribution, self.samples)?;
        writeln!(f, "{:<20} {:>14} {:>14}", "", "EXPECTED", "OBSERVED")?;
        writeln!(
            f,
            "{:<20} {:>14.6} {:>14.6}",
            "mean", self.expected_mean, self.observed_mean
        )?;
        writeln!(
            f,
            "{:<20} {:>14.6} {:>14.6}",
            "standard deviation", self.expected_standard_deviation, self.observed_standard_deviation
        )?;
        writeln!(f, "{:<20} {:>14} {:>14.6}", "median", "", self.observed_median)?;
        write!(
            f,
            "{:<20} {:>14} {:>14}",
            "range",
            "",
            format!("[{}, {}]", self.observed_minimum, self.observed_maximum)
        )
    }
}

/// Run the sample command
pub fn run(
    config: &CliConfig,
    distribution: Distribution,
    parameters: &SampleParameters,
    format: OutputFormat,
) -> Result<()> {
    let rng = build_generator(config)?;
    info!(samples = config.samples, ?distribution, "Sampling");
    let report = sample(rng.as_ref(), distribution, parameters, config.samples)?;
    match format {
        OutputFormat::Table => println!("{}", report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

/// Draws `samples` values and summarises them.
pub fn sample(
    rng: &dyn RepeatableRng,
    distribution: Distribution,
    parameters: &SampleParameters,
    samples: usize,
) -> Result<SampleReport> {
    let (data, expected_mean, expected_sd) = match distribution {
        Distribution::Binomial => {
            let n = parameters.n.unwrap_or(20);
            let p = parameters.p.unwrap_or(0.163);
            let generator = BinomialGenerator::new(n, p, rng)?;
            let n = f64::from(n);
            (draw(&generator, samples)?, n * p, (n * p * (1.0 - p)).sqrt())
        }
        Distribution::Poisson => {
            let mean = parameters.mean.unwrap_or(19.0);
            let generator = PoissonGenerator::new(mean, rng)?;
            (draw(&generator, samples)?, mean, mean.sqrt())
        }
        Distribution::Exponential => {
            let rate = parameters.rate.unwrap_or(3.2);
            let generator = ExponentialGenerator::new(rate, rng)?;
            (draw(&generator, samples)?, 1.0 / rate, 1.0 / rate)
        }
        Distribution::Gaussian => {
            let mean = parameters.mean.unwrap_or(147.0);
            let sd = parameters.standard_deviation.unwrap_or(17.0);
            let generator = GaussianGenerator::new(mean, sd, rng)?;
            (draw(&generator, samples)?, mean, sd)
        }
        Distribution::Uniform => {
            let minimum = parameters.minimum.unwrap_or(150.0);
            let maximum = parameters.maximum.unwrap_or(500.0);
            let generator = ContinuousUniformGenerator::new(minimum, maximum, rng)?;
            let spread = maximum - minimum;
            (
                draw(&generator, samples)?,
                minimum + spread / 2.0,
                spread / 12f64.sqrt(),
            )
        }
        Distribution::DiscreteUniform => {
            let minimum = integer_bound("minimum", parameters.minimum.unwrap_or(150.0))?;
            let maximum = integer_bound("maximum", parameters.maximum.unwrap_or(500.0))?;
            let generator = DiscreteUniformGenerator::new(minimum, maximum, rng)?;
            let outcomes = f64::from(maximum) - f64::from(minimum) + 1.0;
            (
                draw(&generator, samples)?,
                (f64::from(minimum) + f64::from(maximum)) / 2.0,
                ((outcomes * outcomes - 1.0) / 12.0).sqrt(),
            )
        }
    };

    Ok(SampleReport {
        distribution,
        samples,
        expected_mean,
        observed_mean: data.arithmetic_mean()?,
        expected_standard_deviation: expected_sd,
        observed_standard_deviation: data.sample_standard_deviation()?,
        observed_median: data.median()?,
        observed_minimum: data.minimum()?,
        observed_maximum: data.maximum()?,
    })
}

fn draw<T, G>(generator: &G, samples: usize) -> Result<DataSet>
where
    T: Into<f64>,
    G: NumberGenerator<T>,
{
    let mut data = DataSet::with_capacity(samples);
    for _ in 0..samples {
        data.add_value(generator.next_value()?.into());
    }
    Ok(data)
}

fn integer_bound(name: &'static str, value: f64) -> std::result::Result<i32, RngError> {
    if value.fract() == 0.0 && value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX) {
        Ok(value as i32)
    } else {
        Err(RngError::InvalidParameter {
            name,
            value: value.to_string(),
            constraint: "a whole number within the 32-bit range",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maths_core::maths::approx_equals;
    use maths_random::MersenneTwisterRng;

    fn rng() -> MersenneTwisterRng {
        MersenneTwisterRng::from_seed(&(1..=16).collect::<Vec<u8>>()).unwrap()
    }

    fn assert_close(report: &SampleReport, tolerance: f64) {
        assert!(
            approx_equals(report.observed_mean, report.expected_mean, tolerance),
            "{}",
            report
        );
        assert!(
            approx_equals(
                report.observed_standard_deviation,
                report.expected_standard_deviation,
                tolerance
            ),
            "{}",
            report
        );
    }

    #[test]
    fn test_default_parameters_match_theory() {
        let defaults = SampleParameters::default();
        for (distribution, tolerance) in [
            (Distribution::Binomial, 0.02),
            (Distribution::Poisson, 0.02),
            (Distribution::Exponential, 0.04),
            (Distribution::Gaussian, 0.02),
            (Distribution::Uniform, 0.02),
            (Distribution::DiscreteUniform, 0.02),
        ] {
            let report = sample(&rng(), distribution, &defaults, 10_000).unwrap();
            assert_eq!(report.samples, 10_000);
            assert_close(&report, tolerance);
        }
    }

    #[test]
    fn test_invalid_parameter_is_reported() {
        let parameters = SampleParameters {
            p: Some(1.5),
            ..Default::default()
        };
        assert!(matches!(
            sample(&rng(), Distribution::Binomial, &parameters, 10),
            Err(crate::CliError::Rng(RngError::InvalidParameter { name: "p", .. }))
        ));
    }

    #[test]
    fn test_fractional_discrete_bound_rejected() {
        let parameters = SampleParameters {
            minimum: Some(1.5),
            ..Default::default()
        };
        assert!(sample(&rng(), Distribution::DiscreteUniform, &parameters, 10).is_err());
    }

    #[test]
    fn test_single_sample_has_no_spread() {
        assert!(matches!(
            sample(&rng(), Distribution::Gaussian, &SampleParameters::default(), 1),
            Err(crate::CliError::Statistics(_))
        ));
    }

    #[test]
    fn test_report_serialises() {
        let report = sample(&rng(), Distribution::Poisson, &SampleParameters::default(), 100).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["distribution"], "poisson");
        assert_eq!(json["samples"], 100);
        assert!(report.to_string().contains("standard deviation"));
    }
}
