//! Hand-written containers used by the order workflow.
//!
//! ## Components
//!
//! - [`Stack`]: LIFO, `Vec`-backed (recent orders)
//! - [`Queue`]: FIFO, slab-allocated linked list (orders awaiting processing)
//! - [`SinglyLinkedList`]: head-only chain with id lookup (processed history)
//! - [`QueueNode`]: Queue node with a slab-key link
//!
//! ## Emptiness
//!
//! Reading from an empty container is never an error. `pop`, `peek`,
//! `dequeue`, `front` and `remove_front` return `None` and leave the
//! container untouched.
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Stack push / pop / peek | O(1)* |
//! | Queue enqueue / dequeue / front | O(1)* |
//! | List insert at front / remove front | O(1) |
//! | List insert at back / find by id | O(n) |
//!
//! *Amortized for pushes and enqueues

pub mod node;
pub mod stack;
pub mod queue;
pub mod linked_list;

pub use node::QueueNode;
pub use stack::Stack;
pub use queue::Queue;
pub use linked_list::SinglyLinkedList;
