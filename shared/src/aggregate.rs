//! 分析数据的派生聚合
//!
//! 按指标名对 metric_value 求和，供图表渲染。
//! 纯派生状态：基础集合变化时整体重算，绝不直接修改。

use std::collections::BTreeMap;

use crate::models::AnalyticsEvent;

/// 单个指标的汇总值
#[derive(Debug, Clone, PartialEq)]
pub struct MetricTotal {
    pub metric_name: String,
    pub total: f64,
}

/// 按指标名分组求和，结果按名称排序保证确定性
pub fn summarize(events: &[AnalyticsEvent]) -> Vec<MetricTotal> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for event in events {
        *totals.entry(event.metric_name.as_str()).or_insert(0.0) += event.metric_value;
    }
    totals
        .into_iter()
        .map(|(metric_name, total)| MetricTotal {
            metric_name: metric_name.to_string(),
            total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: i64, name: &str, value: f64) -> AnalyticsEvent {
        AnalyticsEvent {
            analytics_id: id,
            metric_name: name.to_string(),
            metric_value: value,
            user_id: None,
            product_id: None,
            session_id: None,
            source: None,
        }
    }

    #[test]
    fn sums_values_grouped_by_metric_name() {
        let events = vec![
            event(1, "page_view", 3.0),
            event(2, "purchase", 49.9),
            event(3, "page_view", 2.0),
        ];
        let totals = summarize(&events);
        assert_eq!(
            totals,
            vec![
                MetricTotal {
                    metric_name: "page_view".to_string(),
                    total: 5.0
                },
                MetricTotal {
                    metric_name: "purchase".to_string(),
                    total: 49.9
                },
            ]
        );
    }

    #[test]
    fn empty_collection_yields_empty_summary() {
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn recomputation_is_stable_across_input_order() {
        let a = vec![event(1, "b_metric", 1.0), event(2, "a_metric", 2.0)];
        let b = vec![event(2, "a_metric", 2.0), event(1, "b_metric", 1.0)];
        assert_eq!(summarize(&a), summarize(&b));
    }
}
