//! Assessment analysis command implementations

use tabled::Tabled;

use super::{AssessmentCommands, CommandContext, notified};
use crate::client::AssessmentApi;
use crate::client::models::{
    AnalyzeAssessmentRequest, ItemStatusUpdate, NotImplementedItem, UpdateStatusRequest,
};
use crate::error::{Error, Result};
use crate::output;

/// Not-implemented item for table display
#[derive(Tabled)]
pub struct ItemDisplay {
    #[tabled(rename = "ITEM ID")]
    id: String,
    #[tabled(rename = "TITLE")]
    title: String,
    #[tabled(rename = "SCORE")]
    score: String,
    #[tabled(rename = "STATUS")]
    status: String,
}

impl From<NotImplementedItem> for ItemDisplay {
    fn from(item: NotImplementedItem) -> Self {
        Self {
            id: item.item_id,
            title: item.title,
            score: item
                .score
                .map(|s| format!("{:.1}", s))
                .unwrap_or_else(|| "-".to_string()),
            status: item.status.unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub async fn run(ctx: &CommandContext, command: AssessmentCommands) -> Result<()> {
    match command {
        AssessmentCommands::Analyze {
            id,
            threshold,
            recommendations,
        } => {
            let request = AnalyzeAssessmentRequest {
                score_threshold: threshold,
                include_recommendations: recommendations,
            };
            let outcome = ctx
                .client
                .analyze_assessment(&id, &request)
                .await
                .map_err(notified)?;
            output::print_record(&outcome, ctx.format)
        }
        AssessmentCommands::Results { id } => {
            let results = ctx.client.assessment_results(&id).await?;
            output::print_record(&results, ctx.format)
        }
        AssessmentCommands::NotImplemented { id, threshold } => {
            let items = ctx.client.not_implemented_items(&id, threshold).await?;
            output::print_list::<_, ItemDisplay>(&items.items, ctx.format)
        }
        AssessmentCommands::UpdateStatus { id, items } => {
            let request = UpdateStatusRequest {
                updates: parse_updates(&items)?,
            };
            let result = ctx
                .client
                .update_item_statuses(&id, &request)
                .await
                .map_err(notified)?;
            output::print_record(&result, ctx.format)
        }
    }
}

/// Parse `ITEM=STATUS` pairs
fn parse_updates(items: &[String]) -> Result<Vec<ItemStatusUpdate>> {
    items
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((item, status)) if !item.is_empty() && !status.is_empty() => {
                Ok(ItemStatusUpdate {
                    item_id: item.trim().to_string(),
                    status: status.trim().to_uppercase(),
                })
            }
            _ => Err(Error::Other(format!(
                "Invalid item update '{}', expected ITEM=STATUS",
                pair
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_updates() {
        let updates =
            parse_updates(&["ctrl-1=implemented".to_string(), "ctrl-2 = partial".to_string()])
                .unwrap();
        assert_eq!(updates[0].item_id, "ctrl-1");
        assert_eq!(updates[0].status, "IMPLEMENTED");
        assert_eq!(updates[1].item_id, "ctrl-2");
        assert_eq!(updates[1].status, "PARTIAL");
    }

    #[test]
    fn test_parse_updates_rejects_missing_status() {
        assert!(parse_updates(&["ctrl-1=".to_string()]).is_err());
        assert!(parse_updates(&["ctrl-1".to_string()]).is_err());
    }
}
