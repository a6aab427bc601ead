//! Storefront Router
//!
//! Renders storefront pages in the terminal. Route changes are published to
//! subscribed observers (e.g. the progress indicator) instead of global hooks.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use colored::Colorize;
use std::sync::Arc;
use uuid::Uuid;

use boutique::Product;

use crate::api::BoutiqueClient;

/// Catalog root, where the storefront lists every product
pub const HOME_PATH: &str = "/";

/// Navigation capability
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn push(&self, path: &str) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteEvent {
    ChangeStart { path: String },
    ChangeComplete { path: String },
    ChangeError { path: String, message: String },
}

/// Subscriber to route changes
pub trait RouteObserver: Send + Sync {
    fn on_route_event(&self, event: &RouteEvent);
}

/// Observer registry
#[derive(Default, Clone)]
pub struct RouteEvents {
    observers: Vec<Arc<dyn RouteObserver>>,
}

impl RouteEvents {
    pub fn subscribe(&mut self, observer: Arc<dyn RouteObserver>) {
        self.observers.push(observer);
    }

    pub fn emit(&self, event: RouteEvent) {
        for observer in &self.observers {
            observer.on_route_event(&event);
        }
    }
}

/// Prints start and done markers to stderr so stdout stays clean for piping
pub struct ProgressIndicator;

impl ProgressIndicator {
    pub fn marker(event: &RouteEvent) -> String {
        match event {
            RouteEvent::ChangeStart { path } => {
                format!("{} {}", "Loading".dimmed(), path.dimmed())
            }
            RouteEvent::ChangeComplete { path } => {
                format!("{} {}", "Loaded".dimmed(), path.dimmed())
            }
            RouteEvent::ChangeError { path, message } => {
                format!("{} {}: {}", "Failed to load".red(), path, message)
            }
        }
    }
}

impl RouteObserver for ProgressIndicator {
    fn on_route_event(&self, event: &RouteEvent) {
        eprintln!("{}", Self::marker(event));
    }
}

/// Storefront pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Product(Uuid),
}

impl Page {
    /// Parse `/` or `/product?id=<id>` (`_id` is accepted too)
    pub fn parse(path: &str) -> Result<Self> {
        let (route, query) = path.split_once('?').unwrap_or((path, ""));

        match route.trim_end_matches('/') {
            "" => Ok(Page::Home),
            "/product" => {
                let id = query
                    .split('&')
                    .filter_map(|pair| pair.split_once('='))
                    .find(|(key, _)| *key == "id" || *key == "_id")
                    .map(|(_, value)| value)
                    .context("Product page needs an id")?;
                let id = Uuid::parse_str(id)
                    .with_context(|| format!("Invalid product id: {}", id))?;
                Ok(Page::Product(id))
            }
            _ => bail!("No page at {}", path),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Page::Home => HOME_PATH.to_string(),
            Page::Product(id) => format!("/product?id={}", id),
        }
    }
}

/// Router that renders pages from the catalog API
pub struct CliRouter<'a> {
    client: &'a BoutiqueClient,
    events: RouteEvents,
}

impl<'a> CliRouter<'a> {
    pub fn new(client: &'a BoutiqueClient) -> Self {
        Self {
            client,
            events: RouteEvents::default(),
        }
    }

    pub fn subscribe(&mut self, observer: Arc<dyn RouteObserver>) {
        self.events.subscribe(observer);
    }

    async fn render(&self, page: &Page) -> Result<()> {
        match page {
            Page::Home => {
                let products = self.client.list_products().await?;
                print_catalog(&products);
            }
            Page::Product(id) => match self.client.get_product(*id).await? {
                Some(product) => print_product(&product),
                None => println!("Product {} not found.", id),
            },
        }
        Ok(())
    }
}

#[async_trait]
impl Navigator for CliRouter<'_> {
    async fn push(&self, path: &str) -> Result<()> {
        let path = path.to_string();
        self.events.emit(RouteEvent::ChangeStart { path: path.clone() });

        let result = match Page::parse(&path) {
            Ok(page) => self.render(&page).await,
            Err(e) => Err(e),
        };

        match &result {
            Ok(()) => self.events.emit(RouteEvent::ChangeComplete { path }),
            Err(e) => self.events.emit(RouteEvent::ChangeError {
                path,
                message: format!("{:#}", e),
            }),
        }
        result
    }
}

pub fn print_catalog(products: &[Product]) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }

    println!("{}", "Products:".bold());
    for product in products {
        println!(
            "  {} {} {}",
            product.id.to_string().dimmed(),
            product.name.cyan().bold(),
            format!("${:.2}", product.price).green()
        );
    }
}

pub fn print_product(product: &Product) {
    println!("{} {}", product.name.cyan().bold(), format!("${:.2}", product.price).green());
    println!("  {}", product.media_url.dimmed());
    println!("\n{}", "About this product".bold());
    println!("  {}", product.description);
    println!("\n  {}", product.id.to_string().dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<RouteEvent>>,
    }

    impl RouteObserver for RecordingObserver {
        fn on_route_event(&self, event: &RouteEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn test_parse_pages() {
        let id = Uuid::new_v4();
        assert_eq!(Page::parse("/").unwrap(), Page::Home);
        assert_eq!(Page::parse("").unwrap(), Page::Home);
        assert_eq!(
            Page::parse(&format!("/product?id={}", id)).unwrap(),
            Page::Product(id)
        );
        assert_eq!(
            Page::parse(&format!("/product?_id={}", id)).unwrap(),
            Page::Product(id)
        );
        assert_eq!(Page::parse(&Page::Product(id).path()).unwrap(), Page::Product(id));
    }

    #[test]
    fn test_parse_rejects_unknown_pages() {
        assert!(Page::parse("/cart").is_err());
        assert!(Page::parse("/product").is_err());
        assert!(Page::parse("/product?id=nope").is_err());
    }

    #[test]
    fn test_events_reach_every_subscriber_in_order() {
        let first = Arc::new(RecordingObserver::default());
        let second = Arc::new(RecordingObserver::default());
        let mut events = RouteEvents::default();
        events.subscribe(first.clone());
        events.subscribe(second.clone());

        events.emit(RouteEvent::ChangeStart { path: "/".to_string() });
        events.emit(RouteEvent::ChangeComplete { path: "/".to_string() });

        let expected = vec![
            RouteEvent::ChangeStart { path: "/".to_string() },
            RouteEvent::ChangeComplete { path: "/".to_string() },
        ];
        assert_eq!(*first.events.lock().unwrap(), expected);
        assert_eq!(*second.events.lock().unwrap(), expected);
    }

    #[test]
    fn test_progress_marks_every_transition() {
        colored::control::set_override(false);
        let path = "/".to_string();

        let start = ProgressIndicator::marker(&RouteEvent::ChangeStart { path: path.clone() });
        let done = ProgressIndicator::marker(&RouteEvent::ChangeComplete { path: path.clone() });
        let failed = ProgressIndicator::marker(&RouteEvent::ChangeError {
            path,
            message: "connection refused".to_string(),
        });

        assert_eq!(start, "Loading /");
        assert_eq!(done, "Loaded /");
        assert_eq!(failed, "Failed to load /: connection refused");
    }

    #[tokio::test]
    async fn test_unknown_path_reports_change_error() {
        let client = BoutiqueClient::new("http://127.0.0.1:9");
        let observer = Arc::new(RecordingObserver::default());
        let mut router = CliRouter::new(&client);
        router.subscribe(observer.clone());

        assert!(router.push("/cart").await.is_err());

        let events = observer.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], RouteEvent::ChangeStart { path: "/cart".to_string() });
        assert!(matches!(&events[1], RouteEvent::ChangeError { path, .. } if path == "/cart"));
    }
}
