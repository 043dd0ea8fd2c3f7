use super::domain::{BenchmarkComparison, KpiKind, PerformanceTier};

/// Fixed industry reference bands for one metric. For lower-is-better
/// metrics the thresholds are ceilings; otherwise floors.
pub(super) struct BenchmarkBands {
    pub excellent: f64,
    pub good: f64,
    pub average: f64,
    pub industry_value: f64,
}

pub(super) fn bands_for(kind: KpiKind) -> BenchmarkBands {
    match kind {
        KpiKind::DaysInAr => BenchmarkBands {
            excellent: 30.0,
            good: 40.0,
            average: 50.0,
            industry_value: 45.0,
        },
        KpiKind::CleanClaimRate => BenchmarkBands {
            excellent: 98.0,
            good: 95.0,
            average: 90.0,
            industry_value: 95.0,
        },
        KpiKind::DenialRate => BenchmarkBands {
            excellent: 4.0,
            good: 8.0,
            average: 12.0,
            industry_value: 10.0,
        },
        KpiKind::GrossCollectionRate => BenchmarkBands {
            excellent: 45.0,
            good: 38.0,
            average: 30.0,
            industry_value: 34.0,
        },
        KpiKind::NetCollectionRate => BenchmarkBands {
            excellent: 98.0,
            good: 95.0,
            average: 92.0,
            industry_value: 95.0,
        },
        KpiKind::AdjustedCollectionRate => BenchmarkBands {
            excellent: 99.0,
            good: 96.0,
            average: 93.0,
            industry_value: 96.0,
        },
        KpiKind::FirstPassYield => BenchmarkBands {
            excellent: 90.0,
            good: 85.0,
            average: 75.0,
            industry_value: 81.0,
        },
        KpiKind::CostToCollect => BenchmarkBands {
            excellent: 2.0,
            good: 3.0,
            average: 4.0,
            industry_value: 3.5,
        },
        KpiKind::AvgDaysToPayment => BenchmarkBands {
            excellent: 25.0,
            good: 35.0,
            average: 45.0,
            industry_value: 38.0,
        },
    }
}

/// Relative slack around the industry value inside which a metric reads
/// "at benchmark".
const AT_BENCHMARK_TOLERANCE: f64 = 0.02;

pub(super) fn compare(kind: KpiKind, value: f64) -> BenchmarkComparison {
    let bands = bands_for(kind);
    let lower_is_better = kind.lower_is_better();

    let percentile = if lower_is_better {
        if value <= bands.excellent {
            90
        } else if value <= bands.good {
            75
        } else if value <= bands.average {
            50
        } else {
            25
        }
    } else if value >= bands.excellent {
        90
    } else if value >= bands.good {
        75
    } else if value >= bands.average {
        50
    } else {
        25
    };

    let tolerance = bands.industry_value.abs() * AT_BENCHMARK_TOLERANCE;
    let performance = if (value - bands.industry_value).abs() <= tolerance {
        PerformanceTier::At
    } else if (value < bands.industry_value) == lower_is_better {
        PerformanceTier::Above
    } else {
        PerformanceTier::Below
    };

    BenchmarkComparison {
        industry_value: bands.industry_value,
        performance,
        percentile,
    }
}
