//! Golden snapshot tests for unit generation.
//!
//! These build a representative model and compare the full emitted unit
//! against stored snapshots, so layout changes are reviewed and intentional.
//!
//! Run with: `cargo test --test snapshot_tests`
//! Review changes: `cargo insta review`

use msgdsl::Generator;
use msgdsl::model::{Context, Entity, Member, Message, Modifier};

fn sample_context() -> Context {
    let mut add_item = Message::new("AddItem");
    add_item.members = vec![
        Member::new("qty", "Quantity", "int"),
        Member::new("name", "Name", "string"),
    ];
    add_item.modifiers.push(Modifier::new("?", "ICommand"));
    add_item.string_representation = Some("add {qty} x {name}".to_string());

    let mut cart = Entity::new("Cart");
    cart.messages.push(add_item.clone());

    let mut context = Context::new("Sample.Contracts");
    context.using.push("System".to_string());
    context.contracts.push(add_item);
    context.entities.push(cart);
    context
}

#[test]
fn test_full_unit_snapshot() {
    let output = Generator::default().generate(&sample_context()).unwrap();
    insta::assert_snapshot!(output, @r#"
    using System;

    // ReSharper disable PartialTypeWithSinglePart
    // ReSharper disable UnusedMember.Local
    namespace Sample.Contracts
    {
        #region Generated by Message Contract DSL

        [ProtoContract]
        public sealed class AddItem : ICommand
        {
            [ProtoMember(1)] public readonly int Quantity;
            [ProtoMember(2)] public readonly string Name;

            AddItem () {}
            public AddItem (int quantity, string name)
            {
                Quantity = quantity;
                Name = name;
            }

            public override string ToString()
            {
                return string.Format(@"add {0} x {1}", Quantity, Name);
            }
        }

        public interface ICartApplicationService
        {
            void When(AddItem c);
        }
        #endregion
    }
    "#);
}

#[test]
fn test_snapshot_model_is_reusable() {
    // The snapshot context doubles as the determinism fixture.
    let context = sample_context();
    let generator = Generator::default();
    assert_eq!(generator.generate(&context).unwrap(), generator.generate(&context).unwrap());
}
