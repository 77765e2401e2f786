use tokio::io::{AsyncBufReadExt, BufReader};

use business::domain::cart::use_cases::add_to_cart::{AddToCartParams, AddToCartUseCase};
use business::domain::product::use_cases::get_all::{
    GetAllProductsParams, GetAllProductsUseCase,
};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};

use crate::setup::dependency_injection::DependencyContainer;
use crate::shell::command::{Command, HELP};
use crate::shell::error_mapper::IntoUserMessage;
use crate::shell::render;

/// What the session loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Continue(Option<String>),
    Exit,
}

pub struct Session;

impl Session {
    /// Reads commands from stdin until `quit` or end of input.
    pub async fn run(container: &mut DependencyContainer) -> anyhow::Result<()> {
        println!("Welcome to the store. Type 'help' for commands.");
        if !container.store.is_empty() {
            println!("{}", render::cart(&container.store.snapshot()));
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let step = match Command::parse(&line) {
                Ok(None) => continue,
                Ok(Some(command)) => Self::execute(container, command).await,
                Err(e) => Step::Continue(Some(e.to_string())),
            };
            match step {
                Step::Continue(Some(output)) => println!("{}", output),
                Step::Continue(None) => {}
                Step::Exit => break,
            }
        }

        tracing::info!(items = container.store.count(), "session ended");
        Ok(())
    }

    /// Runs one command. Cart outcomes reach the shopper through the
    /// notifier, so mutations only return text when they fail.
    pub async fn execute(container: &mut DependencyContainer, command: Command) -> Step {
        let output = match command {
            Command::Products(filter) => {
                match container
                    .get_all_products
                    .execute(GetAllProductsParams { filter })
                    .await
                {
                    Ok(products) => Some(render::product_list(&products)),
                    Err(e) => Some(e.into_user_message()),
                }
            }
            Command::Show(id) => {
                match container
                    .get_product_by_id
                    .execute(GetProductByIdParams { id })
                    .await
                {
                    Ok(product) => Some(render::product_detail(&product)),
                    Err(e) => Some(e.into_user_message()),
                }
            }
            Command::Add {
                product_id,
                quantity,
            } => {
                let result = container
                    .add_to_cart
                    .execute(
                        &mut container.store,
                        AddToCartParams {
                            product_id,
                            quantity,
                        },
                    )
                    .await;
                match result {
                    Ok(Some(_)) => None,
                    Ok(None) => Some("Quantity must be at least 1.".to_string()),
                    Err(e) => Some(e.into_user_message()),
                }
            }
            Command::Update {
                product_id,
                quantity,
            } => container
                .store
                .update_quantity(&product_id, quantity)
                .map_or_else(|| Some(not_in_cart(&product_id)), |_| None),
            Command::Remove(product_id) => container
                .store
                .remove_item(&product_id)
                .map_or_else(|| Some(not_in_cart(&product_id)), |_| None),
            Command::Clear => {
                container.store.clear();
                None
            }
            Command::Cart => Some(render::cart(&container.store.snapshot())),
            Command::Help => Some(HELP.to_string()),
            Command::Quit => return Step::Exit,
        };
        Step::Continue(output)
    }
}

fn not_in_cart(product_id: &impl std::fmt::Display) -> String {
    format!("{} is not in your cart.", product_id)
}
