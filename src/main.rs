use chrono::{Datelike, Local, Weekday};
use iced::keyboard::{self, key::Named, Key};
use iced::widget::{column, container, scrollable};
use iced::{Element, Length, Subscription, Task, Theme};
use std::time::{Duration, Instant};

mod config;
mod error;
mod images;
mod logging;
mod moisture;
mod state;
mod ui;

use config::{Config, ThemeChoice};
use images::{loader, ImageCache, LoadError};
use state::catalog::Catalog;
use state::data::PlantId;
use state::navigation::{Back, Navigator, Route};
use state::screen::PlantListScreen;
use ui::list::{card_ids, ListViewport};

/// Frame interval while a photo is fading in
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// How often "today" is re-sampled from the clock
const CLOCK_INTERVAL: Duration = Duration::from_secs(60);

/// Main application state
struct BotaniQ {
    config: Config,
    navigator: Navigator,
    screen: PlantListScreen,
    images: ImageCache,
    /// Day used to index each plant's moisture week
    today: Weekday,
    /// Last frame time, drives the photo cross-fade
    now: Instant,
    viewport: ListViewport,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// "Show all plants" on the home view
    OpenPlants,
    /// Back button in the header
    Back,
    QueryChanged(String),
    PlantPressed(PlantId),
    CloseModal,
    ListScrolled(scrollable::Viewport),
    ImageLoaded(PlantId, Result<loader::LoadedImage, LoadError>),
    Frame(Instant),
    ClockTick,
}

impl BotaniQ {
    fn new(config: Config) -> (Self, Task<Message>) {
        let catalog = Catalog::new();
        tracing::info!("🌿 Loaded {} plants", catalog.len());

        let images = ImageCache::new(config.placeholder_blurhash(), config.image_transition());

        (
            BotaniQ {
                config,
                navigator: Navigator::new(Route::Home),
                screen: PlantListScreen::new(catalog),
                images,
                today: Local::now().weekday(),
                now: Instant::now(),
                viewport: ListViewport::default(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenPlants => {
                self.navigator.push(Route::Plants);
                self.request_visible_images()
            }
            Message::Back => match self.navigator.back() {
                Back::To(route) => {
                    tracing::debug!("Navigated back to {:?}", route);
                    Task::none()
                }
                Back::Exit => {
                    tracing::info!("👋 Back pressed at root, exiting");
                    iced::exit()
                }
            },
            Message::QueryChanged(query) => {
                self.screen.set_query(query);
                self.request_visible_images()
            }
            Message::PlantPressed(id) => {
                if self.screen.select(id) {
                    tracing::debug!("Opened detail for plant {}", id);
                }
                self.request_image(id)
            }
            Message::CloseModal => {
                self.screen.close_modal();
                Task::none()
            }
            Message::ListScrolled(viewport) => {
                self.viewport = ListViewport::from_scroll(&viewport);
                self.request_visible_images()
            }
            Message::ImageLoaded(id, result) => {
                self.now = Instant::now();
                self.images.finish(id, result, self.now);
                Task::none()
            }
            Message::Frame(now) => {
                self.now = now;
                Task::none()
            }
            Message::ClockTick => {
                let today = Local::now().weekday();
                if today != self.today {
                    tracing::info!("📅 Day changed to {}", today);
                    self.today = today;
                }
                Task::none()
            }
        }
    }

    /// Start fetching the photo for `id` unless it was already requested
    fn request_image(&mut self, id: PlantId) -> Task<Message> {
        let Some(plant) = self.screen.catalog().get(id) else {
            return Task::none();
        };
        if !self.images.begin(id) {
            return Task::none();
        }

        let uri = plant.image.clone();
        tracing::debug!("Requesting photo for {} from {}", plant.name, uri);
        Task::perform(
            loader::fetch(uri, self.config.image_max_size()),
            move |result| Message::ImageLoaded(id, result),
        )
    }

    /// Fetch photos for every card the list is about to build
    fn request_visible_images(&mut self) -> Task<Message> {
        let ids = card_ids(&self.screen.visible_plants(), self.viewport);

        Task::batch(ids.into_iter().map(|id| self.request_image(id)))
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match self.navigator.current() {
            Route::Home => ui::home::view(self.screen.catalog().len()),
            Route::Plants => self.plants_view(),
        }
    }

    fn plants_view(&self) -> Element<Message> {
        let visible = self.screen.visible_plants();

        let base = container(
            column![
                ui::header::view(self.screen.query()),
                ui::list::view(&visible, self.today, &self.images, self.now, self.viewport),
            ]
            .spacing(20),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(16)
        .style(|_theme| container::Style {
            background: Some(ui::SCREEN_BACKGROUND.into()),
            ..container::Style::default()
        });

        ui::modal::plant_modal(
            base.into(),
            self.screen.selected(),
            self.screen.is_modal_open(),
            Message::CloseModal,
            self.today,
            &self.images,
            self.now,
        )
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![
            iced::time::every(CLOCK_INTERVAL).map(|_| Message::ClockTick),
            keyboard::on_key_press(handle_key),
        ];

        if self.images.is_animating(self.now) {
            subscriptions.push(iced::time::every(FRAME_INTERVAL).map(Message::Frame));
        }

        Subscription::batch(subscriptions)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        match self.config.theme {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

fn handle_key(key: Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        Key::Named(Named::Escape) => Some(Message::CloseModal),
        _ => None,
    }
}

fn main() -> iced::Result {
    if let Err(err) = logging::init() {
        eprintln!("⚠️  Logging disabled: {}", err);
    }

    let config = config::load().unwrap_or_else(|err| {
        tracing::warn!("⚠️  Could not load settings, using defaults: {}", err);
        Config::default()
    });

    iced::application("botaniQ", BotaniQ::update, BotaniQ::view)
        .subscription(BotaniQ::subscription)
        .theme(BotaniQ::theme)
        .window_size((420.0, 820.0))
        .centered()
        .run_with(move || BotaniQ::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> BotaniQ {
        BotaniQ::new(Config::default()).0
    }

    #[test]
    fn test_starts_on_home_with_modal_closed() {
        let app = app();
        assert_eq!(app.navigator.current(), Route::Home);
        assert!(!app.screen.is_modal_open());
    }

    #[test]
    fn test_back_from_plants_returns_home() {
        let mut app = app();
        let _ = app.update(Message::OpenPlants);
        assert_eq!(app.navigator.current(), Route::Plants);
        let _ = app.update(Message::Back);
        assert_eq!(app.navigator.current(), Route::Home);
    }

    #[test]
    fn test_open_plants_requests_each_photo_once() {
        let mut app = app();
        let _ = app.update(Message::OpenPlants);
        for id in 1..=4 {
            assert!(matches!(app.images.get(id), Some(images::ImageSlot::Loading)));
        }
        // A second pass finds everything already requested
        let _ = app.update(Message::QueryChanged("m".to_string()));
        assert!(!app.images.begin(1));
    }

    #[test]
    fn test_press_then_close_keeps_selection() {
        let mut app = app();
        let _ = app.update(Message::OpenPlants);
        let _ = app.update(Message::PlantPressed(1));
        assert!(app.screen.is_modal_open());

        let _ = app.update(Message::CloseModal);
        assert!(!app.screen.is_modal_open());
        assert_eq!(app.screen.selected().map(|p| p.id), Some(1));
    }

    #[test]
    fn test_escape_closes_modal() {
        let message = handle_key(Key::Named(Named::Escape), keyboard::Modifiers::empty());
        assert!(matches!(message, Some(Message::CloseModal)));
        assert!(handle_key(Key::Named(Named::Enter), keyboard::Modifiers::empty()).is_none());
    }

    #[test]
    fn test_failed_photo_keeps_placeholder() {
        let mut app = app();
        let _ = app.update(Message::OpenPlants);
        let _ = app.update(Message::ImageLoaded(4, Err(LoadError::Status(404))));
        assert!(app.images.photo(4, app.now).is_none());
        assert!(!app.images.is_animating(app.now));
    }

    #[test]
    fn test_theme_follows_config() {
        let mut app = app();
        assert_eq!(app.theme(), Theme::Light);
        app.config.theme = ThemeChoice::Dark;
        assert_eq!(app.theme(), Theme::Dark);
    }
}
