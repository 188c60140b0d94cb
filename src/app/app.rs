use std::io;

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::{ListState, TableState},
};
use strum::IntoEnumIterator;

use crate::{
    api::ApiProvider,
    app::{ui, utils},
    ledger::{LedgerError, LedgerService},
    models::{TransactionType, Valuation},
    services::{PriceService, ServiceError},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputField {
    Ticker,
    Amount,
}

pub struct TradeInput {
    pub action: TransactionType,
    pub field: InputField,
    pub ticker: String,
    pub amount: String,
}

impl TradeInput {
    fn new(action: TransactionType) -> Self {
        Self {
            action,
            field: InputField::Ticker,
            ticker: String::new(),
            amount: String::new(),
        }
    }
}

pub struct App {
    ledger: LedgerService,
    prices: PriceService,
    valuations: Vec<Valuation>,
    table_state: TableState,
    popup_message: Option<String>,
    error_popup: Option<String>,
    show_provider_popup: bool,
    provider_state: ListState,
    trade_input: Option<TradeInput>,
}

impl App {
    pub fn new(ledger: LedgerService, prices: PriceService) -> Self {
        let mut provider_state = ListState::default();
        provider_state.select(Some(0));
        Self {
            ledger,
            prices,
            valuations: Vec::new(),
            table_state: TableState::default(),
            popup_message: None,
            error_popup: None,
            show_provider_popup: false,
            provider_state,
            trade_input: None,
        }
    }

    fn show_popup(&mut self, message: &str) {
        self.popup_message = Some(message.to_string());
    }

    fn clear_popup(&mut self) {
        self.popup_message = None;
    }

    fn show_error_popup(&mut self, message: &str) {
        self.error_popup = Some(message.to_string());
    }

    fn clear_error_popup(&mut self) {
        self.error_popup = None;
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        // Show held positions right away; prices arrive on the first F5.
        match self.ledger.open_positions() {
            Ok(positions) => {
                self.valuations = positions
                    .map(|position| Valuation::new(position, None, None, None))
                    .collect();
            }
            Err(LedgerError::StoreNotFound { .. }) => {}
            Err(err) => self.show_error_popup(&format!("Error reading positions: {:#}", err)),
        }

        loop {
            self.draw(terminal)?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if self.trade_input.is_some() {
                    self.handle_trade_input(terminal, key.code).await?;
                    continue;
                }

                if self.show_provider_popup {
                    self.handle_provider_popup(key.code)?;
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Enter | KeyCode::Esc => {
                        if self.error_popup.is_some() {
                            self.clear_error_popup();
                            continue;
                        }
                        if self.popup_message.is_some() {
                            self.clear_popup();
                            continue;
                        }
                        if key.code == KeyCode::Esc {
                            self.table_state.select(None);
                        }
                    }
                    KeyCode::F(2) => {
                        self.trade_input = Some(TradeInput::new(TransactionType::Buy));
                    }
                    KeyCode::F(3) => {
                        self.trade_input = Some(TradeInput::new(TransactionType::Sell));
                    }
                    KeyCode::F(5) => {
                        self.check_positions(terminal).await?;
                    }
                    KeyCode::F(8) => {
                        self.show_provider_popup = true;
                    }
                    KeyCode::Down => {
                        if !self.valuations.is_empty() {
                            let i = match self.table_state.selected() {
                                Some(i) => {
                                    if i >= self.valuations.len() - 1 {
                                        0
                                    } else {
                                        i + 1
                                    }
                                }
                                None => 0,
                            };
                            self.table_state.select(Some(i));
                        }
                    }
                    KeyCode::Up => {
                        if !self.valuations.is_empty() {
                            let i = match self.table_state.selected() {
                                Some(i) => {
                                    if i == 0 {
                                        self.valuations.len() - 1
                                    } else {
                                        i - 1
                                    }
                                }
                                None => 0,
                            };
                            self.table_state.select(Some(i));
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|frame| {
            ui::render(
                frame,
                &self.valuations,
                &mut self.table_state,
                &self.popup_message,
                &self.error_popup,
                self.show_provider_popup,
                &mut self.provider_state,
                self.prices.provider(),
                &self.trade_input,
            )
        })?;
        Ok(())
    }

    async fn handle_trade_input<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        code: KeyCode,
    ) -> Result<()> {
        let Some(input) = self.trade_input.as_mut() else {
            return Ok(());
        };

        match code {
            KeyCode::Esc => {
                self.trade_input = None;
            }
            KeyCode::Backspace => match input.field {
                InputField::Ticker => {
                    input.ticker.pop();
                }
                InputField::Amount => {
                    input.amount.pop();
                }
            },
            KeyCode::Char(c) => match input.field {
                InputField::Ticker => input.ticker.push(c),
                InputField::Amount => input.amount.push(c),
            },
            KeyCode::Enter => match input.field {
                InputField::Ticker => {
                    let ticker = input.ticker.trim().to_uppercase();
                    if !utils::is_valid_ticker(&ticker) {
                        self.trade_input = None;
                        self.show_error_popup(&format!("Invalid ticker symbol '{}'", ticker));
                        return Ok(());
                    }
                    input.ticker = ticker;
                    input.field = InputField::Amount;
                }
                InputField::Amount => {
                    let action = input.action;
                    let ticker = input.ticker.clone();
                    let amount = match utils::parse_amount(&input.amount) {
                        Ok(amount) => amount,
                        Err(err) => {
                            self.trade_input = None;
                            self.show_error_popup(&format!("{:#}", err));
                            return Ok(());
                        }
                    };
                    self.trade_input = None;

                    self.show_popup("Fetching price...");
                    self.draw(terminal)?;
                    let result = self.execute_trade(action, &ticker, amount).await;
                    self.clear_popup();

                    match result {
                        Ok(message) => {
                            self.check_positions(terminal).await?;
                            self.show_popup(&message);
                        }
                        Err(err) => self.show_error_popup(&format!("{:#}", err)),
                    }
                }
            },
            _ => {}
        }

        Ok(())
    }

    fn handle_provider_popup(&mut self, code: KeyCode) -> Result<()> {
        match code {
            KeyCode::Esc => self.show_provider_popup = false,
            KeyCode::Down => {
                let i = match self.provider_state.selected() {
                    Some(i) => {
                        if i >= ApiProvider::iter().len() - 1 {
                            0
                        } else {
                            i + 1
                        }
                    }
                    None => 0,
                };
                self.provider_state.select(Some(i));
            }
            KeyCode::Up => {
                let i = match self.provider_state.selected() {
                    Some(i) => {
                        if i == 0 {
                            ApiProvider::iter().len() - 1
                        } else {
                            i - 1
                        }
                    }
                    None => 0,
                };
                self.provider_state.select(Some(i));
            }
            KeyCode::Enter => {
                if let Some(i) = self.provider_state.selected() {
                    self.prices.set_provider(
                        ApiProvider::iter().nth(i).with_context(|| "Cannot select")?,
                    );
                    self.show_provider_popup = false;
                }
            }
            _ => {}
        }
        Ok(())
    }

    async fn execute_trade(
        &mut self,
        action: TransactionType,
        ticker: &str,
        quantity: i64,
    ) -> Result<String> {
        let price = self.prices.latest_close(ticker).await.ok_or_else(|| {
            ServiceError::PriceUnavailable {
                ticker: ticker.to_string(),
            }
        })?;
        let today = Local::now().date_naive();

        match action {
            TransactionType::Buy => {
                self.ledger.buy(ticker, quantity, price, today)?;
                Ok(format!("Bought {} of {} at {}", quantity, ticker, price))
            }
            TransactionType::Sell => {
                self.ledger.sell(ticker, quantity, price)?;
                Ok(format!("Sold {} of {} at {}", quantity, ticker, price))
            }
        }
    }

    async fn check_positions<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.table_state.select(None);
        self.show_popup("Updating prices...");
        self.draw(terminal)?;

        let result = self.refresh_valuations().await;

        self.clear_popup();
        self.draw(terminal)?;

        match result {
            Ok(()) => {}
            Err(LedgerError::StoreNotFound { .. }) => {
                self.valuations.clear();
                self.show_error_popup("No positions file found.");
            }
            Err(err) => self.show_error_popup(&format!("Error reading positions: {:#}", err)),
        }

        Ok(())
    }

    async fn refresh_valuations(&mut self) -> Result<(), LedgerError> {
        let mut valuations = Vec::new();

        for position in self.ledger.open_positions()? {
            let purchase_price = self
                .prices
                .close_on_date(position.ticker(), *position.acquisition_date())
                .await;
            let current_price = self.prices.latest_close(position.ticker()).await;
            let open_gain = LedgerService::open_gain(&position, purchase_price, current_price);

            valuations.push(Valuation::new(
                position,
                purchase_price,
                current_price,
                open_gain,
            ));
        }

        self.valuations = valuations;
        Ok(())
    }
}
