use std::sync::Arc;

use iced::{widget::text_input, Subscription, Task};

use anonix_ui::widget::Element;

use crate::{
    app::{
        grid::{self, MappingsGrid},
        modal::{self, Modal},
        toast::Toasts,
        tokenizer, view,
    },
    services::gateway::Gateway,
};

#[derive(Debug, Clone)]
pub enum Message {
    OpenTokenize,
    OpenDetokenize,
    Tokenize(modal::Message<String>),
    Detokenize(modal::Message<String>),
    Grid(grid::Message),
    Logout,
}

pub struct AdminPage {
    tokenize: Modal<String>,
    detokenize: Modal<String>,
    grid: MappingsGrid,
    filter_id: text_input::Id,
}

impl AdminPage {
    /// Creates the page and starts loading the mappings.
    pub fn new(gateway: &Arc<dyn Gateway>) -> (Self, Task<Message>) {
        let mut page = Self {
            tokenize: tokenizer::tokenize_modal(),
            detokenize: tokenizer::detokenize_modal(),
            grid: MappingsGrid::default(),
            filter_id: text_input::Id::unique(),
        };
        let task = page.grid.refresh(gateway).map(Message::Grid);
        (page, task)
    }

    pub fn tokenize(&self) -> &Modal<String> {
        &self.tokenize
    }

    pub fn detokenize(&self) -> &Modal<String> {
        &self.detokenize
    }

    pub fn grid(&self) -> &MappingsGrid {
        &self.grid
    }

    pub fn filter_id(&self) -> &text_input::Id {
        &self.filter_id
    }

    pub fn update(
        &mut self,
        gateway: &Arc<dyn Gateway>,
        message: Message,
        toasts: &mut Toasts,
    ) -> Task<Message> {
        match message {
            Message::OpenTokenize => {
                let _ = self.detokenize.close();
                self.tokenize
                    .open(Some(self.filter_id.clone()))
                    .map(Message::Tokenize)
            }
            Message::OpenDetokenize => {
                let _ = self.tokenize.close();
                self.detokenize
                    .open(Some(self.filter_id.clone()))
                    .map(Message::Detokenize)
            }
            Message::Tokenize(msg) => {
                let (task, outcome) = self.tokenize.update(gateway, msg, toasts);
                let task = task.map(Message::Tokenize);
                if outcome.is_some() {
                    Task::batch(vec![
                        task,
                        self.grid
                            .update(gateway, grid::Message::Reload, toasts)
                            .map(Message::Grid),
                    ])
                } else {
                    task
                }
            }
            Message::Detokenize(msg) => {
                let (task, _) = self.detokenize.update(gateway, msg, toasts);
                task.map(Message::Detokenize)
            }
            Message::Grid(msg) => self.grid.update(gateway, msg, toasts).map(Message::Grid),
            // Handled by the application, which drops the session.
            Message::Logout => Task::none(),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(vec![
            self.tokenize.subscription().map(Message::Tokenize),
            self.detokenize.subscription().map(Message::Detokenize),
            self.grid.subscription().map(Message::Grid),
        ])
    }

    pub fn view(&self) -> Element<Message> {
        view::admin::admin(self)
    }
}
