use std::any::{Any, type_name};
use std::fmt::{Debug, Formatter};

pub mod auto_received;

/// Marker for anything that can travel through a mailbox.
pub trait Message: Any + Send + Debug {}

/// Messages handled by the actor cell itself before user code sees them.
pub trait AutoReceivedMessage: Message {}

/// Messages that manage the routee set of a router actor.
pub trait RouterManagementMessage: Message {}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MessageType {
    User,
    System,
    AutoReceived,
    RouterManagement,
}

pub struct DynMessage {
    pub(crate) name: &'static str,
    pub(crate) message_type: MessageType,
    pub(crate) boxed: Box<dyn Any + Send>,
}

impl Debug for DynMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynMessage")
            .field("name", &self.name)
            .field("message_type", &self.message_type)
            .field("boxed", &"..")
            .finish()
    }
}

impl DynMessage {
    fn new<M>(message_type: MessageType, message: M) -> Self where M: Message {
        DynMessage {
            name: type_name::<M>(),
            message_type,
            boxed: Box::new(message),
        }
    }

    pub fn user<M>(message: M) -> Self where M: Message {
        Self::new(MessageType::User, message)
    }

    pub(crate) fn system<M>(message: M) -> Self where M: Message {
        Self::new(MessageType::System, message)
    }

    pub fn auto_received<M>(message: M) -> Self where M: AutoReceivedMessage {
        Self::new(MessageType::AutoReceived, message)
    }

    pub fn router_management<M>(message: M) -> Self where M: RouterManagementMessage {
        Self::new(MessageType::RouterManagement, message)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    pub fn is<M>(&self) -> bool where M: Message {
        self.boxed.is::<M>()
    }

    pub fn downcast_ref<M>(&self) -> Option<&M> where M: Message {
        self.boxed.downcast_ref::<M>()
    }

    pub fn downcast<M>(self) -> Result<M, DynMessage> where M: Message {
        let Self { name, message_type, boxed } = self;
        match boxed.downcast::<M>() {
            Ok(message) => Ok(*message),
            Err(boxed) => Err(Self { name, message_type, boxed }),
        }
    }
}
