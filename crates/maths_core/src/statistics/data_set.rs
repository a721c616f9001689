//! Append-only numeric data set with running aggregates.

use crate::types::StatisticsError;

/// Default number of slots reserved by [`DataSet::new`].
const DEFAULT_CAPACITY: usize = 50;

/// An ordered, growable collection of observed values.
///
/// Count, sum, product, reciprocal sum, minimum and maximum are maintained
/// incrementally as values are added. Order-dependent and deviation-based
/// statistics (median, variance, ...) are computed on demand from the stored
/// values.
///
/// Every statistic fails with [`StatisticsError::EmptyDataSet`] until at
/// least one value has been added.
///
/// # Examples
///
/// ```
/// use maths_core::statistics::DataSet;
///
/// let data = DataSet::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(data.len(), 5);
/// assert_eq!(data.arithmetic_mean().unwrap(), 3.0);
/// assert_eq!(data.sample_variance().unwrap(), 2.5);
///
/// let empty = DataSet::new();
/// assert!(empty.arithmetic_mean().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataSet {
    values: Vec<f64>,
    total: f64,
    product: f64,
    reciprocal_sum: f64,
    minimum: f64,
    maximum: f64,
}

impl Default for DataSet {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSet {
    /// Creates an empty data set with the default initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty data set pre-sized for `capacity` values.
    ///
    /// The set still grows beyond `capacity` as values are added.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            total: 0.0,
            product: 1.0,
            reciprocal_sum: 0.0,
            minimum: f64::INFINITY,
            maximum: f64::NEG_INFINITY,
        }
    }

    /// Creates a data set containing a copy of `values`.
    pub fn from_values(values: &[f64]) -> Self {
        let mut data = Self::with_capacity(values.len());
        data.extend(values.iter().copied());
        data
    }

    /// Appends a value, updating the running aggregates.
    pub fn add_value(&mut self, value: f64) {
        self.values.push(value);
        self.total += value;
        self.product *= value;
        self.reciprocal_sum += 1.0 / value;
        self.minimum = self.minimum.min(value);
        self.maximum = self.maximum.max(value);
    }

    /// Number of values recorded.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no values have been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The recorded values in insertion order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Smallest recorded value.
    pub fn minimum(&self) -> Result<f64, StatisticsError> {
        self.ensure_not_empty()?;
        Ok(self.minimum)
    }

    /// Largest recorded value.
    pub fn maximum(&self) -> Result<f64, StatisticsError> {
        self.ensure_not_empty()?;
        Ok(self.maximum)
    }

    /// Median; the mean of the two central values for an even count.
    pub fn median(&self) -> Result<f64, StatisticsError> {
        self.ensure_not_empty()?;
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        let middle = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            Ok((sorted[middle - 1] + sorted[middle]) / 2.0)
        } else {
            Ok(sorted[middle])
        }
    }

    /// Sum of all values.
    pub fn aggregate(&self) -> Result<f64, StatisticsError> {
        self.ensure_not_empty()?;
        Ok(self.total)
    }

    /// Product of all values.
    pub fn product(&self) -> Result<f64, StatisticsError> {
        self.ensure_not_empty()?;
        Ok(self.product)
    }

    /// Arithmetic mean.
    pub fn arithmetic_mean(&self) -> Result<f64, StatisticsError> {
        self.ensure_not_empty()?;
        Ok(self.total / self.len() as f64)
    }

    /// Geometric mean, the `n`-th root of the product.
    ///
    /// Only meaningful for positive values.
    pub fn geometric_mean(&self) -> Result<f64, StatisticsError> {
        self.ensure_not_empty()?;
        Ok(self.product.powf(1.0 / self.len() as f64))
    }

    /// Harmonic mean, `n` divided by the sum of reciprocals.
    pub fn harmonic_mean(&self) -> Result<f64, StatisticsError> {
        self.ensure_not_empty()?;
        Ok(self.len() as f64 / self.reciprocal_sum)
    }

    /// Mean absolute deviation from the arithmetic mean.
    pub fn mean_deviation(&self) -> Result<f64, StatisticsError> {
        let mean = self.arithmetic_mean()?;
        let total: f64 = self.values.iter().map(|v| (v - mean).abs()).sum();
        Ok(total / self.len() as f64)
    }

    /// Population variance (divides by `n`).
    pub fn variance(&self) -> Result<f64, StatisticsError> {
        Ok(self.sum_squared_deviations()? / self.len() as f64)
    }

    /// Population standard deviation.
    pub fn standard_deviation(&self) -> Result<f64, StatisticsError> {
        Ok(self.variance()?.sqrt())
    }

    /// Sample variance (Bessel-corrected, divides by `n - 1`).
    ///
    /// # Errors
    ///
    /// [`StatisticsError::InsufficientData`] if only one value is recorded.
    pub fn sample_variance(&self) -> Result<f64, StatisticsError> {
        let squared = self.sum_squared_deviations()?;
        if self.len() < 2 {
            return Err(StatisticsError::InsufficientData {
                actual: self.len(),
                required: 2,
            });
        }
        Ok(squared / (self.len() - 1) as f64)
    }

    /// Sample standard deviation.
    pub fn sample_standard_deviation(&self) -> Result<f64, StatisticsError> {
        Ok(self.sample_variance()?.sqrt())
    }

    fn sum_squared_deviations(&self) -> Result<f64, StatisticsError> {
        let mean = self.arithmetic_mean()?;
        Ok(self.values.iter().map(|v| (v - mean).powi(2)).sum())
    }

    fn ensure_not_empty(&self) -> Result<(), StatisticsError> {
        if self.values.is_empty() {
            Err(StatisticsError::EmptyDataSet)
        } else {
            Ok(())
        }
    }
}

impl Extend<f64> for DataSet {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add_value(value);
        }
    }
}

impl FromIterator<f64> for DataSet {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut data = DataSet::new();
        data.extend(iter);
        data
    }
}
