/// Route history for the "go back" action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Plants,
}

/// Outcome of a back press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Back {
    /// Moved to the given route
    To(Route),
    /// Already at the root; the caller should leave the app
    Exit,
}

#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    pub fn current(&self) -> Route {
        // The root is never popped
        self.stack.last().copied().unwrap_or(Route::Home)
    }

    pub fn push(&mut self, route: Route) {
        if self.current() != route {
            self.stack.push(route);
        }
    }

    pub fn back(&mut self) -> Back {
        if self.stack.len() > 1 {
            self.stack.pop();
            Back::To(self.current())
        } else {
            Back::Exit
        }
    }
}
