use std::rc::Rc;

use crate::api::{HttpApi, PredictionApi};
use crate::config::ClientConfig;
use crate::navigator::{BrowserNavigator, Navigator};
use crate::scheduler::{BrowserScheduler, Scheduler};
use crate::session::{LocalSessionStore, SessionStore};

/// Everything a flow needs from the outside world.
///
/// Cloning is cheap; components receive it through a Yew context.
#[derive(Clone)]
pub struct Services {
    pub config: Rc<ClientConfig>,
    pub session: Rc<dyn SessionStore>,
    pub api: Rc<dyn PredictionApi>,
    pub scheduler: Rc<dyn Scheduler>,
    pub navigator: Rc<dyn Navigator>,
}

impl Services {
    pub fn browser(config: ClientConfig) -> Self {
        Self {
            session: Rc::new(LocalSessionStore::init(config.token_key.clone())),
            api: Rc::new(HttpApi::new(config.api_base.clone())),
            scheduler: Rc::new(BrowserScheduler),
            navigator: Rc::new(BrowserNavigator::new(config.clone())),
            config: Rc::new(config),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.session.get()
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
            && same_target(&self.session, &other.session)
            && same_target(&self.api, &other.api)
    }
}

/// Address equality for trait objects, ignoring the vtable half.
fn same_target<T: ?Sized>(a: &Rc<T>, b: &Rc<T>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
