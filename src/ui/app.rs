use crate::catalog::{ColorId, ProductId, SizeId};
use crate::config::UiConfig;
use crate::route::Route;
use crate::ui::detail::{DetailIntent, DetailReducer, DetailState, ImageDirection};
use crate::ui::events::AppEvent;
use crate::ui::listing::{ListingIntent, ListingReducer, ListingState};
use crate::ui::mvi::Reducer;
use crate::ui::swatch::Swatches;
use crate::ui::worker::{LoadCommand, LoadCommandSender};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    route: Route,
    size: Option<(u16, u16)>,
    /// Listing page state (MVI pattern).
    pub listing: ListingState,
    /// Detail page state (MVI pattern).
    pub detail: DetailState,
    /// Bumped on every product load; results from older loads are dropped.
    generation: u64,
    /// Same as `generation`, for product list loads.
    listing_generation: u64,
    loader: Option<LoadCommandSender>,
    swatches: Swatches,
    currency: String,
}

impl App {
    pub fn new(ui: &UiConfig) -> Self {
        Self {
            should_quit: false,
            route: Route::Listing,
            size: None,
            listing: ListingState::default(),
            detail: DetailState::default(),
            generation: 0,
            listing_generation: 0,
            loader: None,
            swatches: Swatches::from_config(ui),
            currency: ui.currency.clone(),
        }
    }

    pub fn set_loader(&mut self, loader: LoadCommandSender) {
        self.loader = Some(loader);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn swatches(&self) -> &Swatches {
        &self.swatches
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Generation of the most recently issued product load.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Generation of the most recently issued product list load.
    pub fn listing_generation(&self) -> u64 {
        self.listing_generation
    }

    pub fn dispatch_listing(&mut self, intent: ListingIntent) {
        tracing::debug!(?intent, "Listing intent");
        dispatch_mvi!(self, listing, ListingReducer, intent);
    }

    pub fn dispatch_detail(&mut self, intent: DetailIntent) {
        tracing::debug!(?intent, "Detail intent");
        dispatch_mvi!(self, detail, DetailReducer, intent);
    }

    /// Switch pages.
    ///
    /// Leaving a detail page discards its selection, and any load still in
    /// flight for it is ignored when it completes.
    pub fn navigate(&mut self, route: Route) {
        tracing::info!(from = %self.route, to = %route, "Navigate");
        let previous = self.route;
        self.route = route;

        match route {
            Route::Listing => {
                self.detail = DetailState::default();
                if !matches!(self.listing, ListingState::Ready { .. }) {
                    self.load_listing();
                }
            }
            Route::Product(product_id) => {
                if previous != route || !self.detail.is_interactive() {
                    self.load_product(product_id);
                }
            }
        }
    }

    /// Re-issue the load for the current page.
    pub fn reload(&mut self) {
        match self.route.product_id() {
            Some(product_id) => self.load_product(product_id),
            None => self.load_listing(),
        }
    }

    fn load_listing(&mut self) {
        self.listing_generation += 1;
        let generation = self.listing_generation;
        self.dispatch_listing(ListingIntent::Load { generation });
        self.send(LoadCommand::Listing { generation });
    }

    fn load_product(&mut self, product_id: ProductId) {
        self.generation += 1;
        let generation = self.generation;
        self.dispatch_detail(DetailIntent::Load {
            product_id,
            generation,
        });
        self.send(LoadCommand::Product {
            product_id,
            generation,
        });
    }

    fn send(&self, command: LoadCommand) {
        let Some(loader) = &self.loader else {
            tracing::warn!(?command, "No loader attached, command dropped");
            return;
        };
        if loader.send(command).is_err() {
            tracing::error!(?command, "Load worker is gone");
        }
    }

    /// Apply a non-key event. Keys go through `input::handle_key`.
    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(_) | AppEvent::Tick => {}
            AppEvent::Resize(cols, rows) => self.on_resize(cols, rows),
            AppEvent::InputClosed => {
                tracing::error!("Terminal input lost, quitting");
                self.request_quit();
            }
            AppEvent::ListingLoaded {
                generation,
                products,
            } => {
                if self.listing.pending_generation() != Some(generation) {
                    tracing::warn!(
                        generation,
                        current = self.listing_generation,
                        "Discarding stale product list"
                    );
                    return;
                }
                self.dispatch_listing(ListingIntent::Loaded {
                    generation,
                    products,
                });
            }
            AppEvent::ListingFailed {
                generation,
                message,
            } => {
                if self.listing.pending_generation() != Some(generation) {
                    tracing::warn!(generation, "Discarding stale product list failure");
                    return;
                }
                self.dispatch_listing(ListingIntent::LoadFailed {
                    generation,
                    message,
                });
            }
            AppEvent::ProductLoaded {
                generation,
                product,
                sizes,
            } => {
                if self.detail.pending_generation() != Some(generation) {
                    tracing::warn!(
                        generation,
                        current = self.generation,
                        product_id = product.id,
                        "Discarding stale product load"
                    );
                    return;
                }
                self.dispatch_detail(DetailIntent::Loaded {
                    generation,
                    product,
                    sizes,
                });
            }
            AppEvent::ProductFailed {
                generation,
                message,
            } => {
                if self.detail.pending_generation() != Some(generation) {
                    tracing::warn!(generation, "Discarding stale product failure");
                    return;
                }
                self.dispatch_detail(DetailIntent::LoadFailed {
                    generation,
                    message,
                });
            }
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn listing_move(&mut self, intent: ListingIntent) {
        self.dispatch_listing(intent);
    }

    /// Open the detail page of the focused listing row.
    pub fn open_focused(&mut self) {
        if let Some(product_id) = self.listing.focused_product_id() {
            self.navigate(Route::Product(product_id));
        }
    }

    pub fn select_color(&mut self, color_id: ColorId) {
        self.dispatch_detail(DetailIntent::SelectColor { color_id });
    }

    pub fn select_size(&mut self, size_id: SizeId) {
        self.dispatch_detail(DetailIntent::SelectSize { size_id });
    }

    pub fn navigate_image(&mut self, direction: ImageDirection) {
        self.dispatch_detail(DetailIntent::NavigateImage(direction));
    }

    pub fn jump_to_image(&mut self, index: usize) {
        self.dispatch_detail(DetailIntent::JumpToImage { index });
    }

    /// Select the neighbouring color that has images, wrapping around.
    pub fn cycle_color(&mut self, forward: bool) {
        let Some(selection) = self.detail.selection() else {
            return;
        };
        let colors: Vec<ColorId> = selection
            .product()
            .colors
            .iter()
            .filter(|color| color.has_images())
            .map(|color| color.id)
            .collect();
        let current = selection.color().id;
        if let Some(next) = neighbour(&colors, current, forward) {
            self.select_color(next);
        }
    }

    /// Select the neighbouring available size in catalog order, wrapping around.
    pub fn cycle_size(&mut self, forward: bool) {
        let Some(selection) = self.detail.selection() else {
            return;
        };
        let color = selection.color();
        let available: Vec<SizeId> = selection
            .sizes()
            .iter()
            .filter(|size| color.supports_size(size.id))
            .map(|size| size.id)
            .collect();
        let Some(current) = selection.size_id() else {
            return;
        };
        if let Some(next) = neighbour(&available, current, forward) {
            self.select_size(next);
        }
    }
}

fn neighbour(ids: &[u32], current: u32, forward: bool) -> Option<u32> {
    let position = ids.iter().position(|id| *id == current)?;
    let len = ids.len();
    let next = if forward {
        (position + 1) % len
    } else {
        (position + len - 1) % len
    };
    ids.get(next).copied()
}
