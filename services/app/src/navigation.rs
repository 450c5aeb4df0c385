//! Screen routes and the transitions between them

use tracing::debug;

/// A screen the user can be on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Home,
    Add,
    Edit { id: String },
}

/// What a screen action asks the navigator to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Remain on the current screen
    Stay,
    /// Open a screen on top of the current one
    Push(Route),
    /// Swap the current screen for another
    Replace(Route),
    /// Return to the previous screen
    Back,
}

/// Stack of visited screens
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    /// Screen on top of the stack
    pub fn current(&self) -> &Route {
        // never empty: `Back` on the root is ignored
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Apply a transition and return the screen now showing
    pub fn apply(&mut self, transition: Transition) -> &Route {
        match transition {
            Transition::Stay => {}
            Transition::Push(route) => self.stack.push(route),
            Transition::Replace(route) => {
                self.stack.pop();
                self.stack.push(route);
            }
            Transition::Back => {
                if self.stack.len() > 1 {
                    self.stack.pop();
                }
            }
        }
        debug!("Navigated to {:?}", self.current());
        self.current()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}
