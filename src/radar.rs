//! 레이더(스파이더) 차트용 데이터 준비.
//!
//! 다각형을 닫기 위해 첫 번째 라벨/값을 맨 뒤에 한 번 더 붙인다.
//! 반지름 축은 항상 0~5로 고정한다.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::ops::RangeInclusive;

use crate::importance::{ImportanceRecord, SCORE_MAX, SCORE_MIN};

/// 반지름 축 범위.
pub const RADIAL_RANGE: RangeInclusive<f64> = SCORE_MIN..=SCORE_MAX;

/// 닫힌 다각형 형태의 차트 시리즈.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    pub title: String,
    /// 마지막 항목은 첫 항목의 복제.
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl RadarSeries {
    /// 중요도 레코드를 축 순서대로 펼친 뒤 닫는다.
    pub fn from_record(title: impl Into<String>, record: &ImportanceRecord) -> Self {
        Self::from_pairs(
            title,
            record.iter().map(|(p, v)| (p.name().to_string(), v)),
        )
    }

    /// 임의의 (라벨, 값) 목록으로 만든다. 번역된 라벨을 쓸 때 사용한다.
    pub fn from_pairs(
        title: impl Into<String>,
        pairs: impl IntoIterator<Item = (String, f64)>,
    ) -> Self {
        let (mut labels, mut values): (Vec<String>, Vec<f64>) = pairs.into_iter().unzip();
        close_loop(&mut labels, &mut values);
        Self {
            title: title.into(),
            labels,
            values,
        }
    }

    /// 닫기 전 축 개수.
    pub fn axis_count(&self) -> usize {
        self.labels.len().saturating_sub(1)
    }

    pub fn is_closed(&self) -> bool {
        self.labels.len() >= 2
            && self.labels.first() == self.labels.last()
            && self.values.first() == self.values.last()
    }

    /// 축별 (라벨, 값). 닫힘용 복제 항목은 제외한다.
    pub fn axes(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .zip(self.values.iter())
            .take(self.axis_count())
            .map(|(l, v)| (l.as_str(), *v))
    }

    /// 중심 기준 화면 좌표(y 아래 방향)의 꼭짓점. 닫힘 점까지 포함한다.
    ///
    /// `radius`는 축 최대값(5)에 해당하는 길이다.
    pub fn vertices(&self, radius: f64) -> Vec<(f64, f64)> {
        let n = self.axis_count();
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| polar_to_screen(axis_angle(i % n.max(1), n), scaled(*v) * radius))
            .collect()
    }

    /// 축 끝점 좌표(라벨 배치용).
    pub fn axis_ends(&self, radius: f64) -> Vec<(f64, f64)> {
        let n = self.axis_count();
        (0..n)
            .map(|i| polar_to_screen(axis_angle(i, n), radius))
            .collect()
    }
}

/// 첫 라벨/값 쌍을 끝에 덧붙여 다각형을 닫는다. 빈 목록은 그대로 둔다.
pub fn close_loop<L: Clone, V: Clone>(labels: &mut Vec<L>, values: &mut Vec<V>) {
    if let (Some(l), Some(v)) = (labels.first().cloned(), values.first().cloned()) {
        labels.push(l);
        values.push(v);
    }
}

/// 축 i의 각도(라디안). 12시 방향에서 시작해 시계 방향으로 돈다.
pub fn axis_angle(i: usize, n: usize) -> f64 {
    if n == 0 {
        return -FRAC_PI_2;
    }
    -FRAC_PI_2 + TAU * i as f64 / n as f64
}

/// 값을 축 범위로 자른 뒤 0~1 비율로 바꾼다.
pub fn scaled(value: f64) -> f64 {
    let (lo, hi) = (*RADIAL_RANGE.start(), *RADIAL_RANGE.end());
    (value.clamp(lo, hi) - lo) / (hi - lo)
}

fn polar_to_screen(angle: f64, r: f64) -> (f64, f64) {
    (r * angle.cos(), r * angle.sin())
}

/// CLI용 막대 그래프 문자열. `width`는 최대값(5)에 해당하는 칸 수.
pub fn render_text(series: &RadarSeries, width: usize) -> String {
    let label_w = series
        .axes()
        .map(|(l, _)| l.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = format!("[{}]\n", series.title);
    for (label, value) in series.axes() {
        let filled = (scaled(value) * width as f64).round() as usize;
        let bar: String = "█".repeat(filled) + &"·".repeat(width.saturating_sub(filled));
        let pad = label_w.saturating_sub(label.chars().count());
        out.push_str(&format!("  {label}{} {bar} {value}\n", " ".repeat(pad)));
    }
    out
}
