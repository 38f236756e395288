resource_keys! {
    /// Keys of the `error` resource namespace.
    ///
    /// Domain exceptions carry one of these to name the user facing message.
    /// Adding an entry here requires adding the matching `error` resource,
    /// otherwise clients receive an empty message.
    pub enum ErrorMessageKey {
        AccessDenied,
        BillingQueryError,
        BundleNotFound,
        CriteriaNotFound,
        CustomFieldValueNotFound,
        DefaultErrorMessage,
        EmailNotProvided,
        EntitlementsNotFound,
        FreePaymentMethodNotFound,
        GroupsNotFound,
        InvalidAtsId,
        InvalidBillingCode,
        InvalidBundleId,
        InvalidBundleName,
        InvalidCustomFieldDisplayLabel,
        InvalidCustomFieldName,
        InvalidRequeueJobPostingStatus,
        InvalidChildMediaID,
        InvalidCustomFieldID,
        InvalidCustomFieldOptionText,
        InvalidCustomFieldOptionOrder,
        InvalidCustomFieldOptionValue,
        InvalidErrorTicketKey,
        InvalidGroupId,
        InvalidId,
        InvalidImportXmlContent,
        InvalidImportXmlTitle,
        InvalidLicenseId,
        InvalidMediaPaymentConfig,
        InvalidMediaId,
        InvalidMediaCode,
        InvalidMembershipId,
        InvalidMembershipType,
        InvalidOrganizationID,
        InvalidPaymentMethod,
        InvalidParentMediaID,
        InvalidReferenceNumber,
        InvalidRoleKey,
        InvalidSearchContent,
        InvalidSectionID,
        // Spelling is part of the wire contract (ResourceKey field).
        InvalidSelecion,
        InvalidTenantId,
        InvalidUserId,
        BoardNotFound,
        MappingNotFound,
        PostingCardinalityError,
        PostingTransferTypeError,
        SchedulerSynchronizationError,
        LicenseNotFound,
        LogNotSubmitted,
        MembershipNotFound,
        NoContent,
        NoGroupIdForJob,
        NoMediaAssociated,
        NoMembershipOrPricingFound,
        NoPaymentOptionsFound,
        NoSpecifiedJobBoardActionType,
        NotEntitledToEditJob,
        NotEntiledToEditPostedJob,
        NotEntitledToPostFree,
        NotEntitledToPostMembership,
        PaymentMethodNotFound,
        UnableToObtainLicenseId,
        UnableToSaveJobMediaMapping,
        UserNotFound,
        CustomFieldUniqueValue,
        NoTransactionInventory,
        ManualLicenseNotFound,
        NoManualTransactionInventory,
        NotEntitledToCreateStandaloneJob,
        ClientOrGroupsNotFound,
        ClientOrGroupsBeenSubmittedAlready,
        NotAuthenticated,
        UnauthorizedAction,
    }
}
