use crate::{
    checkout::{
        initialize::{ValidPayment, to_minor_units},
        verify::{VerifiedPayment, to_major_units},
    },
    gateway::{
        initialize::{InitializeMetadata, InitializeRequest},
        verify::VerifyData,
    },
};

impl<'a> From<(&ValidPayment<'a>, Option<&'a str>)> for InitializeRequest<'a> {
    fn from((payment, callback_url): (&ValidPayment<'a>, Option<&'a str>)) -> Self {
        InitializeRequest {
            email: payment.email,
            amount: to_minor_units(payment.amount),
            metadata: InitializeMetadata {
                first_name: payment.first_name,
                last_name: payment.last_name,
                course: payment.course,
            },
            callback_url,
        }
    }
}

impl From<VerifyData> for VerifiedPayment {
    fn from(
        VerifyData {
            reference,
            amount,
            currency,
            channel,
            paid_at,
            gateway_response,
            customer,
            metadata,
        }: VerifyData,
    ) -> Self {
        Self {
            reference,
            amount: to_major_units(amount),
            currency,
            channel,
            paid_at,
            gateway_response,
            customer,
            metadata,
        }
    }
}
