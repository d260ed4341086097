//! Deal pipeline totals and stage ordering.

use crate::model::deal::{Deal, DealStage};

/// Sum of amounts over deals still in the pipeline (not Won/Lost).
pub fn pipeline_value(deals: &[Deal]) -> f64 {
    deals
        .iter()
        .filter(|deal| !deal.stage.is_terminal())
        .map(Deal::amount_or_zero)
        .sum()
}

/// Sum of amounts over Won deals.
pub fn won_revenue(deals: &[Deal]) -> f64 {
    deals_in_stage(deals, DealStage::Won)
        .map(Deal::amount_or_zero)
        .sum()
}

pub fn active_deal_count(deals: &[Deal]) -> usize {
    deals.iter().filter(|deal| !deal.stage.is_terminal()).count()
}

pub fn won_deal_count(deals: &[Deal]) -> usize {
    deals_in_stage(deals, DealStage::Won).count()
}

pub fn deals_in_stage(deals: &[Deal], stage: DealStage) -> impl Iterator<Item = &Deal> {
    deals.iter().filter(move |deal| deal.stage == stage)
}

/// Orders deals Prospect, Quoted, Negotiation, Scheduled, Won, Lost.
pub fn sort_deals_by_stage(deals: &mut [Deal]) {
    deals.sort_by_key(|deal| deal.stage.precedence());
}

#[cfg(test)]
mod tests {
    use super::{pipeline_value, sort_deals_by_stage, won_revenue};
    use crate::model::deal::{Deal, DealStage};
    use chrono::{TimeZone, Utc};

    fn deal(id: i64, stage: DealStage, amount: Option<f64>) -> Deal {
        Deal {
            id,
            name: format!("deal {id}"),
            contact_id: None,
            service_type: None,
            stage,
            amount,
            probability: None,
            close_date: None,
            recurring: None,
            notes: None,
            created_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_date: None,
        }
    }

    #[test]
    fn terminal_deals_do_not_count_toward_pipeline() {
        let mut deals = vec![
            deal(1, DealStage::Prospect, Some(100.0)),
            deal(2, DealStage::Scheduled, None),
            deal(3, DealStage::Quoted, Some(250.5)),
        ];
        let before = pipeline_value(&deals);
        assert_eq!(before, 350.5);

        deals.push(deal(4, DealStage::Won, Some(1_000.0)));
        deals.push(deal(5, DealStage::Lost, Some(2_000.0)));
        assert_eq!(pipeline_value(&deals), before);
        assert_eq!(won_revenue(&deals), 1_000.0);
    }

    #[test]
    fn stage_sort_uses_board_order_and_is_stable() {
        let mut deals = vec![
            deal(1, DealStage::Lost, None),
            deal(2, DealStage::Negotiation, None),
            deal(3, DealStage::Prospect, None),
            deal(4, DealStage::Negotiation, None),
            deal(5, DealStage::Won, None),
        ];
        sort_deals_by_stage(&mut deals);

        let ids: Vec<_> = deals.iter().map(|deal| deal.id).collect();
        assert_eq!(ids, vec![3, 2, 4, 5, 1]);
    }
}
