//! Board data exchanged with the REST API.

use serde::{Deserialize, Serialize};

/// A kanban card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card identifier.
    pub id: String,
    /// Card title.
    pub title: String,
    /// Optional longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional assignee display name.
    #[serde(default)]
    pub assignee: Option<String>,
}

/// A board column with its ordered cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column identifier.
    pub id: String,
    /// Column name.
    pub name: String,
    /// Cards in display order.
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// A kanban board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Board identifier.
    pub id: String,
    /// Board name.
    pub name: String,
    /// Columns in display order.
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// Request body for moving a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveCardRequest {
    /// Destination column.
    pub column_id: String,
    /// Zero-based position within the destination column.
    pub position: usize,
}

impl Board {
    /// Column at a pager index, if any.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Move a card to the end of another column.
    ///
    /// Returns the request describing the move, or `None` when the card or
    /// target column does not exist or the card is already there.
    pub fn move_card(&mut self, card_id: &str, to_column: usize) -> Option<MoveCardRequest> {
        let from_column = self
            .columns
            .iter()
            .position(|column| column.cards.iter().any(|card| card.id == card_id))?;
        if from_column == to_column || to_column >= self.columns.len() {
            return None;
        }
        let source = &mut self.columns[from_column].cards;
        let card_index = source.iter().position(|card| card.id == card_id)?;
        let card = source.remove(card_index);
        let target = &mut self.columns[to_column];
        target.cards.push(card);
        Some(MoveCardRequest {
            column_id: target.id.clone(),
            position: target.cards.len() - 1,
        })
    }
}

/// Identifier of [`demo_board`]; moves on it never reach the API.
pub const DEMO_BOARD_ID: &str = "demo";

/// Board shown when the API is unreachable or the user is browsing offline.
#[must_use]
pub fn demo_board() -> Board {
    let card = |id: &str, title: &str, assignee: Option<&str>| Card {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        assignee: assignee.map(str::to_string),
    };
    Board {
        id: DEMO_BOARD_ID.to_string(),
        name: "Demo project".to_string(),
        columns: vec![
            Column {
                id: "todo".to_string(),
                name: "To do".to_string(),
                cards: vec![
                    card("c-1", "Draft release notes", None),
                    card("c-2", "Audit colour contrast", Some("Sam")),
                ],
            },
            Column {
                id: "doing".to_string(),
                name: "In progress".to_string(),
                cards: vec![card("c-3", "Swipeable columns", Some("Alex"))],
            },
            Column {
                id: "review".to_string(),
                name: "Review".to_string(),
                cards: vec![card("c-4", "Drawer focus handling", Some("Kim"))],
            },
            Column {
                id: "done".to_string(),
                name: "Done".to_string(),
                cards: vec![card("c-5", "Breakpoint helpers", None)],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_decodes_with_missing_optional_fields() {
        let raw = r#"{"id":"b1","name":"Roadmap","columns":[{"id":"k1","name":"Todo","cards":[{"id":"x","title":"Ship"}]},{"id":"k2","name":"Done"}]}"#;
        let board: Board = serde_json::from_str(raw).expect("board decodes");
        assert_eq!(board.columns.len(), 2);
        assert_eq!(board.columns[0].cards[0].description, None);
        assert!(board.columns[1].cards.is_empty());
        assert_eq!(board.column(1).map(|c| c.name.as_str()), Some("Done"));
        assert!(board.column(2).is_none());
    }

    #[test]
    fn move_request_serializes_flat() {
        let body = MoveCardRequest {
            column_id: "k2".to_string(),
            position: 0,
        };
        assert_eq!(
            serde_json::to_string(&body).expect("serializes"),
            r#"{"column_id":"k2","position":0}"#
        );
    }

    #[test]
    fn move_card_appends_to_target_column() {
        let mut board = demo_board();
        let request = board.move_card("c-1", 1).expect("card moves");
        assert_eq!(request.column_id, "doing");
        assert_eq!(request.position, 1);
        assert_eq!(board.columns[0].cards.len(), 1);
        assert_eq!(board.columns[1].cards[1].id, "c-1");
    }

    #[test]
    fn move_card_rejects_noops_and_unknowns() {
        let mut board = demo_board();
        assert!(board.move_card("c-1", 0).is_none());
        assert!(board.move_card("c-1", 9).is_none());
        assert!(board.move_card("missing", 1).is_none());
        assert_eq!(board, demo_board());
    }

    #[test]
    fn demo_board_has_several_columns() {
        let board = demo_board();
        assert_eq!(board.columns.len(), 4);
        assert!(board.columns.iter().all(|c| !c.cards.is_empty()));
    }
}
