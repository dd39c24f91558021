//! Binding between operation inputs, outputs, and the operation catalogue.

use crate::operations::Ec2Operation;
use crate::shape::Shape;

/// An operation input shape.
///
/// Ties each generated `...Input` to its [`Ec2Operation`] and `...Output` so a
/// transport can dispatch requests generically.
pub trait Ec2Request: Shape {
    /// The result shape the operation returns.
    type Output: Shape + Default;

    /// The operation this input belongs to.
    const OPERATION: Ec2Operation;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{CreateRouteInput, DescribeImagesInput};
    use crate::output::DescribeImagesOutput;

    fn operation_of<R: Ec2Request>(_: &R) -> Ec2Operation {
        R::OPERATION
    }

    fn empty_output<R: Ec2Request>() -> R::Output {
        R::Output::default()
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_should_link_input_to_operation() {
        assert_eq!(
            operation_of(&CreateRouteInput::default()),
            Ec2Operation::CreateRoute
        );
        assert_eq!(
            DescribeImagesInput::OPERATION.input_shape_name(),
            DescribeImagesInput::SHAPE_NAME
        );
        assert_eq!(
            DescribeImagesInput::OPERATION.output_shape_name(),
            DescribeImagesOutput::SHAPE_NAME
        );
    }

    #[test]
    fn test_should_produce_empty_output() {
        let output = empty_output::<DescribeImagesInput>();
        assert_eq!(output, DescribeImagesOutput::default());
        assert_eq!(output.to_string(), "{}");
    }

    #[test]
    fn test_should_share_shapes_across_threads() {
        assert_send_sync::<CreateRouteInput>();
        assert_send_sync::<DescribeImagesOutput>();
        assert_send_sync::<Ec2Operation>();
    }

    #[test]
    fn test_should_parse_operation_names() {
        assert_eq!(
            "DescribeInstances".parse::<Ec2Operation>(),
            Ok(Ec2Operation::DescribeInstances)
        );
        assert_eq!(Ec2Operation::from_name("TerminateInstances"), None);
        assert!("TerminateInstances".parse::<Ec2Operation>().is_err());
        for op in Ec2Operation::ALL {
            assert_eq!(Ec2Operation::from_name(op.as_str()), Some(*op));
            assert_eq!(op.to_string(), op.as_str());
        }
        assert_eq!(Ec2Operation::ALL.len(), 23);
    }
}
