use business::domain::product::model::ProductFilter;
use business::domain::shared::value_objects::ProductId;
use rust_decimal::Decimal;

const PRODUCTS_USAGE: &str = "products [--category <id>] [--min <price>] [--max <price>] [--in-stock]";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("'{0}' is not a whole number.")]
    InvalidNumber(String),
    #[error("'{0}' is not a valid price.")]
    InvalidPrice(String),
}

/// One line of shopper input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Products(ProductFilter),
    Show(ProductId),
    Add { product_id: ProductId, quantity: i64 },
    Update { product_id: ProductId, quantity: i64 },
    Remove(ProductId),
    Clear,
    Cart,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  products [filters]     list the catalog
      --category <id>      only one category ('all' for every category)
      --min <price>        minimum price, inclusive
      --max <price>        maximum price, inclusive
      --in-stock           hide out-of-stock products
  show <id>              show one product
  add <id> [qty]         add a product to the cart (default qty 1)
  update <id> <qty>      set the quantity of a cart line
  remove <id>            remove a cart line
  clear                  empty the cart
  cart                   show the cart
  help                   show this help
  quit                   leave the store";

impl Command {
    /// Parses a line of input. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("products" | "ls", flags) => Command::Products(parse_filter(flags)?),
            ("show", [id]) => Command::Show(ProductId::new(*id)),
            ("show", _) => return Err(CommandError::Usage("show <id>")),
            ("add", [id]) => Command::Add {
                product_id: ProductId::new(*id),
                quantity: 1,
            },
            ("add", [id, qty]) => Command::Add {
                product_id: ProductId::new(*id),
                quantity: parse_quantity(qty)?,
            },
            ("add", _) => return Err(CommandError::Usage("add <id> [qty]")),
            ("update", [id, qty]) => Command::Update {
                product_id: ProductId::new(*id),
                quantity: parse_quantity(qty)?,
            },
            ("update", _) => return Err(CommandError::Usage("update <id> <qty>")),
            ("remove" | "rm", [id]) => Command::Remove(ProductId::new(*id)),
            ("remove" | "rm", _) => return Err(CommandError::Usage("remove <id>")),
            ("clear", []) => Command::Clear,
            ("cart", []) => Command::Cart,
            ("help" | "?", _) => Command::Help,
            ("quit" | "exit", _) => Command::Quit,
            _ => return Err(CommandError::Unknown(line.trim().to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_filter(flags: &[&str]) -> Result<ProductFilter, CommandError> {
    let mut filter = ProductFilter::default();
    let mut flags = flags.iter();
    while let Some(flag) = flags.next() {
        match *flag {
            "--in-stock" => filter.in_stock_only = true,
            "--category" => {
                let id = flag_value(flags.next())?;
                filter.category_id = (!id.eq_ignore_ascii_case("all")).then(|| id.to_string());
            }
            "--min" => filter.price_min = Some(parse_price(flag_value(flags.next())?)?),
            "--max" => filter.price_max = Some(parse_price(flag_value(flags.next())?)?),
            _ => return Err(CommandError::Usage(PRODUCTS_USAGE)),
        }
    }
    Ok(filter)
}

fn flag_value<'a>(value: Option<&&'a str>) -> Result<&'a str, CommandError> {
    value.copied().ok_or(CommandError::Usage(PRODUCTS_USAGE))
}

fn parse_price(raw: &str) -> Result<Decimal, CommandError> {
    raw.parse::<Decimal>()
        .map_err(|_| CommandError::InvalidPrice(raw.to_string()))
}

fn parse_quantity(raw: &str) -> Result<i64, CommandError> {
    raw.parse::<i64>()
        .map_err(|_| CommandError::InvalidNumber(raw.to_string()))
}
