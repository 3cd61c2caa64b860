use crate::core::{Board, BoardColumn, Card, ColumnDefinition, DealRecord, DocumentList};
use crate::utils::error::{BoardError, Result};
use std::collections::HashMap;

/// Groups deals into board columns by status.
///
/// Every column definition yields exactly one output column, in order, even
/// when it stays empty. A deal whose status matches no column id is dropped.
/// When two definitions share an id, the first one receives all matching
/// deals. Cards keep input order within their column.
///
/// Fails only when a deal that lands on the board lacks a field its card
/// needs (id, name, price, customer name).
pub fn project(deals: &[DealRecord], columns: &[ColumnDefinition]) -> Result<Board> {
    let mut board: Board = columns.iter().map(BoardColumn::empty).collect();

    let mut index: HashMap<&str, usize> = HashMap::with_capacity(columns.len());
    for (position, column) in columns.iter().enumerate() {
        index.entry(column.id.as_str()).or_insert(position);
    }

    let mut dropped = 0usize;
    for deal in deals {
        let Some(&position) = deal.status.as_deref().and_then(|s| index.get(s)) else {
            dropped += 1;
            continue;
        };

        let column = &mut board[position];
        let card = to_card(deal, column.name())?;
        column.items.push(card);
    }

    tracing::debug!(
        columns = board.len(),
        placed = deals.len() - dropped,
        dropped,
        "Projected deals onto board"
    );

    Ok(board)
}

/// Projects the documents of a raw store response.
pub fn project_documents(list: &DocumentList, columns: &[ColumnDefinition]) -> Result<Board> {
    project(&list.documents, columns)
}

fn to_card(deal: &DealRecord, state: &str) -> Result<Card> {
    let missing = |field: &str| BoardError::MalformedDeal {
        deal_id: deal.id.clone().unwrap_or_default(),
        field: field.to_string(),
    };

    let id = deal.id.clone().ok_or_else(|| missing("$id"))?;
    let name = deal.name.clone().ok_or_else(|| missing("name"))?;
    let price = deal.price.ok_or_else(|| missing("price"))?;
    let customer = deal.customers.as_ref().ok_or_else(|| missing("customers"))?;
    let company_name = customer
        .name
        .clone()
        .ok_or_else(|| missing("customers.name"))?;

    Ok(Card {
        id,
        created_at: deal.created_at,
        name,
        price,
        company_name,
        state: state.to_string(),
    })
}
