use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{
        Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, TableState,
    },
};
use rust_decimal::Decimal;
use strum::IntoEnumIterator;

use crate::{
    api::ApiProvider,
    app::{
        app::{InputField, TradeInput},
        utils,
    },
    models::{TransactionType, Valuation},
};

pub fn render(
    frame: &mut Frame,
    valuations: &[Valuation],
    table_state: &mut TableState,
    popup_message: &Option<String>,
    error_popup: &Option<String>,
    show_provider_popup: bool,
    provider_state: &mut ListState,
    provider: ApiProvider,
    trade_input: &Option<TradeInput>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new(format!("Stock Ledger ({})", provider.to_str()))
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    render_positions(frame, valuations, table_state, chunks[1]);

    let help = Paragraph::new("F2 Buy  F3 Sell  F5 Check Positions  F8 Provider  q Quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);

    if let Some(input) = trade_input {
        render_trade_input(frame, input);
    }

    if show_provider_popup {
        render_provider_popup(frame, provider_state);
    }

    if let Some(message) = popup_message {
        render_message_popup(frame, message);
    }

    if let Some(message) = error_popup {
        render_error_popup(frame, message);
    }
}

fn render_positions(
    frame: &mut Frame,
    valuations: &[Valuation],
    table_state: &mut TableState,
    area: Rect,
) {
    if valuations.is_empty() {
        let empty_message =
            Paragraph::new("No open positions. Press F2 to buy or F5 to check positions.")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty_message, area);
        return;
    }

    let header_cells = [
        "Ticker",
        "Quantity",
        "Acquired",
        "Buy Price",
        "Last Price",
        "Open Gain",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).style(Style::default()).height(1);

    let rows = valuations.iter().map(|valuation| {
        let position = valuation.position();
        let quantity = position.quantity().to_string();
        let acquired = position.acquisition_date().format("%Y-%m-%d").to_string();
        let purchase_price = utils::format_price(valuation.purchase_price());
        let current_price = utils::format_price(valuation.current_price());

        let (gain, gain_color) = match valuation.open_gain() {
            Some(gain) if *gain >= Decimal::ZERO => (format!("{:.2}", gain), Color::Green),
            Some(gain) => (format!("{:.2}", gain), Color::Red),
            None => (String::from("n/a"), Color::Yellow),
        };

        let cells = [
            Cell::from(position.ticker().to_string()),
            Cell::from(quantity),
            Cell::from(acquired),
            Cell::from(purchase_price),
            Cell::from(current_price),
            Cell::from(gain).style(Style::default().fg(gain_color)),
        ];

        Row::new(cells).height(1)
    });

    let widths = [
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("Positions").borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, table_state);
}

fn render_trade_input(frame: &mut Frame, input: &TradeInput) {
    let title = match input.action {
        TransactionType::Buy => "Buy Stock",
        TransactionType::Sell => "Sell Stock",
    };

    let (ticker_line, amount_line) = match input.field {
        InputField::Ticker => (
            format!("Ticker: {}_", input.ticker),
            format!("Amount: {}", input.amount),
        ),
        InputField::Amount => (
            format!("Ticker: {}", input.ticker),
            format!("Amount: {}_", input.amount),
        ),
    };

    let body = format!(
        "{}\n{}\n\nEnter to confirm, Esc to cancel",
        ticker_line, amount_line
    );
    let popup = Paragraph::new(body).block(Block::default().title(title).borders(Borders::ALL));

    let area = centered_rect(40, 25, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn render_provider_popup(frame: &mut Frame, provider_state: &mut ListState) {
    let items: Vec<ListItem> = ApiProvider::iter()
        .map(|provider| ListItem::new(provider.to_str().to_string()))
        .collect();

    let list = List::new(items)
        .block(Block::default().title("Price Provider").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let area = centered_rect(30, 25, frame.area());
    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, provider_state);
}

fn render_message_popup(frame: &mut Frame, message: &str) {
    let popup =
        Paragraph::new(message).block(Block::default().title("Info").borders(Borders::ALL));

    let area = centered_rect(50, 20, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn render_error_popup(frame: &mut Frame, message: &str) {
    let popup = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .block(Block::default().title("Error").borders(Borders::ALL));

    let area = centered_rect(50, 20, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
